//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

pub use message::Message;
pub use state::{App, BannerState, CoreState, WINDOW_SIZE};

use crate::features::Settings;

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings first so the controller tuning is right from the start
        let settings = Settings::load();

        // Seed a settings file on first run so the recognized options are
        // discoverable and editable
        if let Some(path) = Settings::file_path() {
            if !path.exists() {
                if let Err(e) = settings.save() {
                    tracing::warn!("Failed to seed settings file: {}", e);
                }
            }
        }

        // 2. Initialize sub-states
        let banner = BannerState::new((&settings.carousel).into());
        let core = CoreState::new(settings);
        let app = Self { core, banner };

        // 3. Load the item list asynchronously
        let init_task = Task::perform(helpers::load_items(), Message::ItemsLoaded);

        (app, init_task)
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Dynamic window title based on the current slide
    pub fn title(&self) -> String {
        if let Some(item) = self.banner.current_item() {
            format!("Loopreel - {}", item.title)
        } else {
            "Loopreel".to_string()
        }
    }

    /// Subscriptions for the auto-advance timer, animation frames, the
    /// global pointer surface and window resizes
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::time::{Duration, Instant};

        let now = Instant::now();
        let controller = &self.banner.controller;

        // 1. Animation frames while a transition or snap-back is playing.
        // Kept alive through the whole Transitioning phase so the completion
        // tick that triggers the boundary correction always arrives.
        let needs_frames = subscription_logic::needs_animation_frames(
            self.banner.is_animating(now),
            controller.is_transitioning(),
        );
        let animation_sub = if needs_frames {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        // 2. Auto-advance timer. Dropping and re-creating the subscription on
        // hover/drag boundaries restarts the full interval.
        let autoplay_sub = if controller.autoplay_eligible() {
            let interval = self.core.settings.carousel.interval_ms;
            iced::time::every(Duration::from_millis(interval)).map(|_| Message::AutoAdvance)
        } else {
            iced::Subscription::none()
        };

        // 3. Global pointer surface: presses start drags inside the banner
        // bounds, and moves/releases keep a drag session alive even after the
        // pointer leaves the widget.
        let pointer_sub = iced::event::listen().filter_map(|event| match event {
            iced::Event::Mouse(iced::mouse::Event::ButtonPressed(iced::mouse::Button::Left)) => {
                Some(Message::PointerPressed)
            }
            iced::Event::Mouse(iced::mouse::Event::CursorMoved { position }) => {
                Some(Message::PointerMoved(position))
            }
            iced::Event::Mouse(iced::mouse::Event::ButtonReleased(iced::mouse::Button::Left)) => {
                Some(Message::PointerReleased)
            }
            iced::Event::Touch(iced::touch::Event::FingerPressed { position, .. }) => {
                Some(Message::TouchBegan(position))
            }
            iced::Event::Touch(iced::touch::Event::FingerMoved { position, .. }) => {
                Some(Message::TouchMoved(position))
            }
            iced::Event::Touch(iced::touch::Event::FingerLifted { .. })
            | iced::Event::Touch(iced::touch::Event::FingerLost { .. }) => {
                Some(Message::TouchEnded)
            }
            _ => None,
        });

        // 4. Window resize (slide width re-measurement)
        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        iced::Subscription::batch([animation_sub, autoplay_sub, pointer_sub, resize_sub])
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    /// Frames are needed while the offset animates, and through the whole
    /// transitioning phase so the completion tick is never missed.
    pub fn needs_animation_frames(is_animating: bool, is_transitioning: bool) -> bool {
        is_animating || is_transitioning
    }

    /// The auto-advance timer exists only when there is something to advance
    /// and neither hover nor a drag session suppresses it.
    pub fn needs_autoplay_timer(has_items: bool, hovered: bool, dragging: bool) -> bool {
        has_items && !hovered && !dragging
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    mod property_frame_subscription {
        use super::*;

        #[test]
        fn frames_active_while_animating() {
            assert!(needs_animation_frames(true, false));
        }

        #[test]
        fn frames_survive_until_the_transition_is_resolved() {
            // The animation may already be finished, but the controller has
            // not observed it yet; the completion tick must still arrive.
            assert!(
                needs_animation_frames(false, true),
                "frames must stay on while transitioning"
            );
        }

        #[test]
        fn frames_off_when_idle() {
            assert!(!needs_animation_frames(false, false));
        }
    }

    mod property_autoplay_subscription {
        use super::*;

        #[test]
        fn timer_exists_only_in_undisturbed_state() {
            assert!(needs_autoplay_timer(true, false, false));
        }

        #[test]
        fn hover_tears_the_timer_down() {
            assert!(!needs_autoplay_timer(true, true, false));
        }

        #[test]
        fn dragging_tears_the_timer_down() {
            assert!(!needs_autoplay_timer(true, false, true));
        }

        #[test]
        fn empty_list_never_gets_a_timer() {
            for hovered in [false, true] {
                for dragging in [false, true] {
                    assert!(
                        !needs_autoplay_timer(false, hovered, dragging),
                        "no timer without items (hovered={hovered}, dragging={dragging})"
                    );
                }
            }
        }

        #[test]
        fn timer_and_frames_are_independent() {
            // An animating transition must not keep the timer from existing;
            // ticks fired mid-transition are dropped by the controller instead.
            assert!(needs_autoplay_timer(true, false, false));
            assert!(needs_animation_frames(true, true));
        }
    }
}
