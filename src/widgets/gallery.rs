//! Image gallery widget.
//!
//! Loading a category schedules a staggered exit for every card on screen,
//! then, after a settling delay, one insertion task per image. The two batches
//! are independent timeline tasks: a second load issued before the first has
//! finished interleaves with it unless `supersede_stale` is set, in which case
//! insertions carrying an old generation are dropped.

use super::Motion;
use crate::catalog::ImageSpec;
use crate::timeline::Timeline;
use std::time::Duration;

pub type CardId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCard {
    pub id: CardId,
    pub title: String,
    pub url: String,
    pub category: String,
}

/// How a card leaves the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStyle {
    /// Replaced by another category.
    Fade,
    /// Removed by an explicit clear.
    Spin,
}

#[derive(Debug, Clone)]
pub struct CardSlot {
    pub card: ImageCard,
    pub motion: Motion,
    pub exit: ExitStyle,
    pub hovered: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct GalleryTiming {
    pub exit_stagger: Duration,
    pub exit: Duration,
    pub settle: Duration,
    pub enter_stagger: Duration,
    pub enter: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum GalleryTask {
    Exit { card: CardId, style: ExitStyle },
    Detach(CardId),
    Insert {
        generation: u64,
        category: String,
        image: ImageSpec,
    },
    Settle(CardId),
}

#[derive(Debug)]
pub struct Gallery {
    slots: Vec<CardSlot>,
    next_id: CardId,
    image_count: usize,
    category: Option<String>,
    generation: u64,
    supersede_stale: bool,
    timing: GalleryTiming,
    timeline: Timeline<GalleryTask>,
}

impl Gallery {
    pub fn new(timing: GalleryTiming, supersede_stale: bool) -> Self {
        Self {
            slots: Vec::new(),
            next_id: 1,
            image_count: 0,
            category: None,
            generation: 0,
            supersede_stale,
            timing,
            timeline: Timeline::new(),
        }
    }

    /// Replace the grid with `images`. Returns how many insertions were
    /// scheduled; an unknown category simply passes an empty slice.
    pub fn load(&mut self, category: &str, images: &[ImageSpec]) -> usize {
        self.generation += 1;
        self.schedule_exits(ExitStyle::Fade);

        for (i, image) in images.iter().enumerate() {
            let delay = self.timing.settle + self.timing.enter_stagger * i as u32;
            self.timeline.after(
                delay,
                GalleryTask::Insert {
                    generation: self.generation,
                    category: category.to_string(),
                    image: image.clone(),
                },
            );
        }
        self.category = Some(category.to_string());
        tracing::debug!(category, images = images.len(), "gallery load scheduled");
        images.len()
    }

    /// Remove every card and reset the image count.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.schedule_exits(ExitStyle::Spin);
        self.image_count = 0;
        self.category = None;
        tracing::debug!("gallery cleared");
    }

    pub fn advance(&mut self, now: Duration) {
        while let Some(task) = self.timeline.pop_due(now) {
            self.run(task);
        }
        self.timeline.advance_to(now);
    }

    pub fn set_hovered(&mut self, id: CardId, hovered: bool) {
        if let Some(slot) = self.slots.iter_mut().find(|s| s.card.id == id) {
            slot.hovered = hovered;
        }
    }

    /// A card that is on screen and not leaving.
    pub fn card(&self, id: CardId) -> Option<&ImageCard> {
        self.slots
            .iter()
            .find(|s| s.card.id == id && !s.motion.is_leaving())
            .map(|s| &s.card)
    }

    pub fn slots(&self) -> &[CardSlot] {
        &self.slots
    }

    /// Cards inserted since the last clear.
    pub fn image_count(&self) -> usize {
        self.image_count
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn now(&self) -> Duration {
        self.timeline.now()
    }

    pub fn timing(&self) -> GalleryTiming {
        self.timing
    }

    pub fn is_animating(&self) -> bool {
        !self.timeline.is_idle()
    }

    fn schedule_exits(&mut self, style: ExitStyle) {
        let live: Vec<CardId> = self
            .slots
            .iter()
            .filter(|s| !s.motion.is_leaving())
            .map(|s| s.card.id)
            .collect();
        for (i, card) in live.into_iter().enumerate() {
            self.timeline.after(
                self.timing.exit_stagger * i as u32,
                GalleryTask::Exit { card, style },
            );
        }
    }

    fn run(&mut self, task: GalleryTask) {
        let now = self.timeline.now();
        match task {
            GalleryTask::Exit { card, style } => {
                let Some(slot) = self
                    .slots
                    .iter_mut()
                    .find(|s| s.card.id == card && !s.motion.is_leaving())
                else {
                    return;
                };
                slot.motion = Motion::Leaving { since: now };
                slot.exit = style;
                slot.hovered = false;
                self.timeline.after(self.timing.exit, GalleryTask::Detach(card));
            }
            GalleryTask::Detach(card) => {
                self.slots.retain(|s| s.card.id != card);
            }
            GalleryTask::Insert {
                generation,
                category,
                image,
            } => {
                if self.supersede_stale && generation != self.generation {
                    tracing::debug!(generation, current = self.generation, "stale insert dropped");
                    return;
                }
                let id = self.next_id;
                self.next_id += 1;
                self.slots.push(CardSlot {
                    card: ImageCard {
                        id,
                        title: image.title,
                        url: image.url,
                        category,
                    },
                    motion: Motion::Entering { since: now },
                    exit: ExitStyle::Fade,
                    hovered: false,
                });
                self.image_count += 1;
                self.timeline.after(self.timing.enter, GalleryTask::Settle(id));
            }
            GalleryTask::Settle(card) => {
                if let Some(slot) = self.slots.iter_mut().find(|s| s.card.id == card) {
                    if slot.motion.is_entering() {
                        slot.motion = Motion::Settled;
                    }
                }
            }
        }
    }
}
