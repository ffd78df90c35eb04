//! Narrative content: every interaction as plain data.
//!
//! Each furniture item is bound to an `InteractionId`. The id resolves to a
//! prompt plus two choices; a choice carries its score deltas and the
//! acknowledgment line shown afterwards. The world layout (rooms and the
//! furniture in them) is built here as well.

use crate::engine::Rect;
use crate::game::dialog::{Choice, Effect};
use crate::game::room::{Furniture, FurnitureStyle, Room};
use crate::game::{PLAY_HEIGHT, PLAY_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionId {
    Telescreen,
    PartyPoster,
    MemoryHole,
    WorkDesk,
}

/// A prompt and its choices
#[derive(Debug, Clone, Copy)]
pub struct Interaction {
    pub prompt: &'static str,
    pub choices: &'static [Choice],
}

const LOYAL: &str = "You feel more loyal to the Party.";

const TELESCREEN: Interaction = Interaction {
    prompt: "The telescreen blares Party propaganda. Do you listen or turn it off?",
    choices: &[
        Choice {
            label: "Listen",
            effect: Effect { obedience: 10, rebellion: 0, suspicion: -5, acknowledgment: LOYAL },
        },
        Choice {
            label: "Turn it off",
            effect: Effect {
                obedience: 0,
                rebellion: 50,
                suspicion: 20,
                acknowledgment: "A dangerous act of rebellion!",
            },
        },
    ],
};

const PARTY_POSTER: Interaction = Interaction {
    prompt: "You see a poster of Big Brother. Do you pay attention or ignore it?",
    choices: &[
        Choice {
            label: "Look at it",
            effect: Effect { obedience: 5, rebellion: 0, suspicion: -5, acknowledgment: LOYAL },
        },
        Choice {
            label: "Ignore it",
            effect: Effect {
                obedience: 0,
                rebellion: 10,
                suspicion: 10,
                acknowledgment: "You ignored the Party's message.",
            },
        },
    ],
};

const MEMORY_HOLE: Interaction = Interaction {
    prompt: "You look at the Memory Hole, ready to destroy any evidence of thoughtcrime.",
    choices: &[
        Choice {
            label: "Throw away the evidence",
            effect: Effect {
                obedience: 10,
                rebellion: 0,
                suspicion: -5,
                acknowledgment: "You have destroyed the evidence. The Party approves.",
            },
        },
        Choice {
            label: "Keep the evidence",
            effect: Effect {
                obedience: 0,
                rebellion: 20,
                suspicion: 15,
                acknowledgment: "Keeping evidence is an act of rebellion!",
            },
        },
    ],
};

const WORK_DESK: Interaction = Interaction {
    prompt: "You sit at the Work Desk. Do you complete the work or delay it?",
    choices: &[
        Choice {
            label: "Complete the work",
            effect: Effect {
                obedience: 30,
                rebellion: 0,
                suspicion: -10,
                acknowledgment: "You completed the task with precision.",
            },
        },
        Choice {
            label: "Delay the work",
            effect: Effect {
                obedience: 0,
                rebellion: 20,
                suspicion: 20,
                acknowledgment: "You intentionally delayed your work, defying the Party.",
            },
        },
    ],
};

impl InteractionId {
    #[cfg(test)]
    pub const ALL: [InteractionId; 4] = [
        InteractionId::Telescreen,
        InteractionId::PartyPoster,
        InteractionId::MemoryHole,
        InteractionId::WorkDesk,
    ];

    pub fn interaction(self) -> &'static Interaction {
        match self {
            InteractionId::Telescreen => &TELESCREEN,
            InteractionId::PartyPoster => &PARTY_POSTER,
            InteractionId::MemoryHole => &MEMORY_HOLE,
            InteractionId::WorkDesk => &WORK_DESK,
        }
    }
}

// ─── World layout ───────────────────────────────────────────────────────

/// Build the four rooms in a 2×2 grid and furnish them
pub fn build_rooms() -> Vec<Room> {
    let half_w = PLAY_WIDTH / 2;
    let half_h = PLAY_HEIGHT / 2;

    let mut victory_mansions = Room::new(
        "victoryMansions",
        "Victory Mansions",
        Rect::new(0, 0, half_w, half_h),
    );
    let mut ministry_of_truth = Room::new(
        "ministryOfTruth",
        "Ministry of Truth",
        Rect::new(half_w, 0, half_w, half_h),
    );
    let room101 = Room::new("room101", "Room 101", Rect::new(0, half_h, half_w, half_h));
    let prole_district = Room::new(
        "proleDistrict",
        "Prole District",
        Rect::new(half_w, half_h, half_w, half_h),
    );

    victory_mansions.add_furniture(Furniture::new(
        "Telescreen", 200, 20, 50, 100, InteractionId::Telescreen,
    ));
    victory_mansions.add_furniture(
        Furniture::new("Party Poster", 20, 30, 210, 10, InteractionId::PartyPoster)
            .styled(FurnitureStyle::Poster),
    );
    victory_mansions.add_furniture(
        Furniture::new("Memory Hole", 100, 100, 165, 400, InteractionId::MemoryHole)
            .styled(FurnitureStyle::MemoryHole),
    );
    // Authored with a negative offset: the desk sits left of its own room
    ministry_of_truth.add_furniture(
        Furniture::new("Work Desk", 150, 100, 350, -280, InteractionId::WorkDesk)
            .styled(FurnitureStyle::Desk),
    );

    let rooms = vec![victory_mansions, ministry_of_truth, room101, prole_district];
    tracing::info!(
        "World built: {} rooms, {} furniture",
        rooms.len(),
        rooms.iter().map(|r| r.furniture().len()).sum::<usize>()
    );
    rooms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_interaction_has_two_choices() {
        for id in InteractionId::ALL {
            let i = id.interaction();
            assert_eq!(i.choices.len(), 2, "{id:?}");
            assert!(!i.prompt.is_empty());
            for c in i.choices {
                assert!(!c.effect.acknowledgment.is_empty(), "{id:?} / {}", c.label);
            }
        }
    }

    #[test]
    fn obedient_choice_first_rebellious_second() {
        for id in InteractionId::ALL {
            let [loyal, defiant] = id.interaction().choices else {
                panic!("{id:?} should have exactly two choices");
            };
            assert!(loyal.effect.obedience > 0 && loyal.effect.rebellion == 0);
            assert!(loyal.effect.suspicion < 0);
            assert!(defiant.effect.rebellion > 0 && defiant.effect.obedience == 0);
            assert!(defiant.effect.suspicion > 0);
        }
    }

    #[test]
    fn narrative_text_is_ascii() {
        // The bitmap font has no glyphs beyond ASCII
        for id in InteractionId::ALL {
            let i = id.interaction();
            assert!(i.prompt.is_ascii(), "{id:?} prompt");
            for c in i.choices {
                assert!(c.label.is_ascii(), "{id:?} / {}", c.label);
                assert!(c.effect.acknowledgment.is_ascii(), "{id:?} / {}", c.label);
            }
        }
        let ignored = &InteractionId::PartyPoster.interaction().choices[1];
        assert_eq!(ignored.effect.acknowledgment, "You ignored the Party's message.");
    }

    #[test]
    fn telescreen_values() {
        let t = InteractionId::Telescreen.interaction();
        assert_eq!(t.choices[0].label, "Listen");
        assert_eq!(t.choices[0].effect.obedience, 10);
        assert_eq!(t.choices[0].effect.suspicion, -5);
        assert_eq!(t.choices[1].label, "Turn it off");
        assert_eq!(t.choices[1].effect.rebellion, 50);
        assert_eq!(t.choices[1].effect.suspicion, 20);
    }

    #[test]
    fn world_layout() {
        let rooms = build_rooms();
        let ids: Vec<_> = rooms.iter().map(|r| r.id).collect();
        assert_eq!(ids, ["victoryMansions", "ministryOfTruth", "room101", "proleDistrict"]);
        assert_eq!(rooms[0].furniture().len(), 3);
        assert_eq!(rooms[1].furniture().len(), 1);
        assert!(rooms[2].furniture().is_empty());
        assert!(rooms[3].furniture().is_empty());

        let desk = &rooms[1].furniture()[0];
        assert_eq!(desk.style, FurnitureStyle::Desk);
        assert_eq!(desk.activate(), InteractionId::WorkDesk);
    }

    #[test]
    fn all_furniture_inside_play_area() {
        let area = Rect::new(0, 0, PLAY_WIDTH, PLAY_HEIGHT);
        for room in build_rooms() {
            for f in room.furniture() {
                let r = f.rect();
                assert!(area.contains(r.x, r.y), "{} starts outside", f.name);
                assert!(area.contains(r.x + r.w - 1, r.y + r.h - 1), "{} ends outside", f.name);
            }
        }
    }
}
