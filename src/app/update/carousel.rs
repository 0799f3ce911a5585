//! Carousel interaction handlers
//!
//! Translates runtime events (timer ticks, pointer/touch input, animation
//! frames) into controller calls and starts the matching animations.

use iced::Task;
use tracing::{debug, info, warn};

use crate::app::{App, Message, helpers};
use crate::carousel::{Release, Tuning};
use crate::ui::components::slide;

impl App {
    pub(super) fn handle_carousel(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ItemsLoaded(items) => {
                info!("Loaded {} carousel items", items.len());
                let tuning = Tuning::from(&self.core.settings.carousel);
                self.banner
                    .set_items(items.clone(), tuning, self.core.slide_width());

                let probes: Vec<_> = items
                    .iter()
                    .map(|item| {
                        Task::perform(
                            helpers::probe_image(item.id, item.image.clone()),
                            |probed| match probed {
                                Some((id, path, width, height)) => {
                                    Message::SlideImageReady(id, path, width, height)
                                }
                                None => Message::Noop,
                            },
                        )
                    })
                    .collect();
                Some(Task::batch(probes))
            }

            Message::SlideImageReady(id, path, width, height) => {
                self.banner.images.insert(*id, (path.clone(), *width, *height));
                Some(Task::none())
            }

            Message::AutoAdvance => {
                if self.banner.controller.auto_advance() {
                    self.banner.start_transition(iced::time::Instant::now());
                }
                Some(Task::none())
            }

            Message::Navigate(delta) => {
                if self.banner.controller.navigate(*delta) {
                    self.banner.start_transition(iced::time::Instant::now());
                }
                Some(Task::none())
            }

            Message::PointerPressed => {
                if self.core.carousel_bounds().contains(self.core.cursor) {
                    self.banner.controller.pointer_pressed(self.core.cursor.x);
                }
                Some(Task::none())
            }

            Message::PointerMoved(position) => {
                self.core.cursor = *position;
                if self.banner.controller.is_dragging() {
                    self.banner.controller.pointer_moved(position.x);
                } else {
                    let inside = self.core.carousel_bounds().contains(*position);
                    self.banner.controller.set_hovered(inside);
                }
                Some(Task::none())
            }

            Message::PointerReleased => {
                self.finish_drag();
                Some(Task::none())
            }

            Message::TouchBegan(position) => {
                self.core.cursor = *position;
                if self.core.carousel_bounds().contains(*position) {
                    self.banner.controller.pointer_pressed(position.x);
                }
                Some(Task::none())
            }

            Message::TouchMoved(position) => {
                self.core.cursor = *position;
                self.banner.controller.pointer_moved(position.x);
                Some(Task::none())
            }

            Message::TouchEnded => {
                self.finish_drag();
                // Touch leaves no hovering cursor behind
                self.banner.controller.set_hovered(false);
                Some(Task::none())
            }

            Message::AnimationTick => {
                let now = iced::time::Instant::now();
                if self.banner.controller.is_transitioning() && !self.banner.is_animating(now) {
                    if self.banner.controller.transition_done() {
                        debug!(
                            "Boundary correction applied, position {}",
                            self.banner.controller.position()
                        );
                    }
                }
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Shared pointer-up / touch-up path: commit or snap back, and open the
    /// landing page when the release counts as a click.
    fn finish_drag(&mut self) {
        match self.banner.controller.pointer_released() {
            Release::Ignored => {}
            Release::Commit(direction) => {
                debug!("Drag committed, direction {}", direction);
                self.banner.start_transition(iced::time::Instant::now());
            }
            Release::SnapBack { click } => {
                self.banner.start_transition(iced::time::Instant::now());
                if click {
                    self.activate_current_slide();
                }
            }
        }
    }

    /// The only outbound effect: open the activated landing page in the
    /// system browser.
    fn activate_current_slide(&self) {
        let Some(url) = self.banner.current_item().and_then(slide::landing_url) else {
            return;
        };
        info!("Opening landing page: {}", url);
        if let Err(e) = open::that_detached(url) {
            warn!("Failed to open {}: {}", url, e);
        }
    }
}
