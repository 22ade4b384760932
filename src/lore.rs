//! Lore objects found around the house
//!
//! Every object is plain data in [`LORE_TABLE`]. Objects are revealed in
//! ordinal order: object N only appears once object N-1 has been collected.
//! Some objects start a puzzle, identified by an opaque [`PuzzleId`] the
//! scene manager uses to pick a puzzle engine.

use std::collections::BTreeSet;

use glam::Vec2;

use crate::save::SaveData;

/// Placeholder in lore text replaced by the player's name
pub const PLAYER_NAME_TOKEN: &str = "{player}";

/// Opaque puzzle identifier carried by lore objects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleId(&'static str);

impl PuzzleId {
    /// Getting out of bed (timed-activation targets)
    pub const BED: PuzzleId = PuzzleId("puzzle_1");
    /// Calling the doctor (moving answers)
    pub const PHONE_CALL: PuzzleId = PuzzleId("puzzle_2");
    /// Conversation maze
    pub const CONVERSATION: PuzzleId = PuzzleId("puzzle_3");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// A collectible piece of story
#[derive(Debug, Clone, PartialEq)]
pub struct LoreObject {
    pub name: &'static str,
    pub text: &'static str,
    /// Position in house coordinates
    pub location: Vec2,
    pub starts_puzzle: Option<PuzzleId>,
    /// Reveal order, starting at 1
    pub ordinal: u32,
}

impl LoreObject {
    /// Lore text with the player's name filled in
    pub fn text_for(&self, save: &SaveData) -> String {
        self.text.replace(PLAYER_NAME_TOKEN, save.player_name())
    }
}

const fn lore(
    ordinal: u32,
    name: &'static str,
    location: (f32, f32),
    starts_puzzle: Option<PuzzleId>,
    text: &'static str,
) -> LoreObject {
    LoreObject {
        name,
        text,
        location: Vec2::new(location.0, location.1),
        starts_puzzle,
        ordinal,
    }
}

/// Every lore object in the house, sorted by ordinal
pub static LORE_TABLE: [LoreObject; 17] = [
    lore(
        1,
        "Prescription",
        (1400.0, 1700.0), // bathroom sink
        None,
        "CBS PHARMACY\n123 MAIN ST, ANYTOWN USA 12345\n1-800-555-5555\n\n\
         Patient: {player}\nESCITALOPRAM 10MG TABLET\nTAKE ONE TABLET BY MOUTH DAILY\n\n\
         Rx No. 1234567\nQty. 30\nDr. Best, MD - 1 Refills",
    ),
    lore(
        2,
        "Journal",
        (800.0, 2800.0), // bedroom dresser
        None,
        "12/31/2021\n\n\
         I can't believe it's been a year since I started taking my medication. I feel like a \
         completely different person. I'm not sure if it's the medication or the therapy, but I \
         feel like I'm finally starting to get my life back on track. I still have bad days, but \
         they're not as frequent or as intense as they used to be. I'm hopeful that things will \
         continue to improve in the new year.",
    ),
    lore(
        3,
        "Journal",
        (1300.0, 800.0), // living room coffee table
        None,
        "05/14/2022\n\n\
         Today, I met someone who I think I could really like. I'm not sure if they like me back, \
         but I'm hopeful. I'm trying to be more open to new people and experiences. That said, I \
         have trouble believing sometimes that anyone would be interested in me. I'm trying to be \
         more positive, but it's hard.",
    ),
    lore(
        4,
        "Journal",
        (1000.0, 100.0), // kitchen counter
        None,
        "02/14/2022\n\n\
         I hate this stupid holiday. It always reminds me of how alone I am. I know I have friends \
         and family who care about me, but it's not the same as having a romantic partner. I'm \
         tired of feeling like I'm missing out on something that everyone else seems to have. I'm \
         tired of feeling like I'm not good enough. I'm tired of feeling like I'm broken. If only I \
         felt like I could actually talk to more people, then maybe I wouldn't be so alone.",
    ),
    lore(
        5,
        "Journal",
        (1200.0, 3300.0), // bed
        Some(PuzzleId::BED),
        "03/01/2022\n\n\
         I have barely left bed for the past few days. I can't seem to find the energy or \
         motivation to do anything. I know I should be taking my medication, but I can't bring \
         myself to do it. I feel like it's not even worth it. I feel like I'm not worth it. I feel \
         like I'm never going to get better. I've been missing class for weeks and I can't find \
         the motivation to leave my room, which is rapidly becoming a mess...",
    ),
    lore(
        6,
        "Puzzle Complete",
        (1260.0, 3360.0),
        None,
        "You have completed the puzzle. You have successfully gotten out of bed and completed the \
         task of getting out of bed and doing basic daily tasks while struggling with depression.",
    ),
    lore(
        7,
        "Wrist Band (??Hospital??)",
        (1500.0, 1500.0), // bathroom shower
        None,
        "Name: {player}\nDOB: 01/01/1990\nMRN: 123456789",
    ),
    lore(
        8,
        "Prescription",
        (1500.0, 2000.0), // roommate
        None,
        "CBS PHARMACY\n123 MAIN ST, ANYTOWN USA 12345\n1-800-555-5555\n\n\
         Patient: {player}\nALPRAZOLAM (Xanax) 0.5MG TABLET\nTAKE ONE TABLET AS NEEDED FOR ANXIETY\n\n\
         Rx No. 7654322\nQty. 90\nDr. Best, MD - 1 Refills",
    ),
    lore(
        9,
        "Journal",
        (200.0, 3000.0), // plant room
        None,
        "03/30/2022\n\n\
         I ended up in the hospital yesterday. It's my least favorite place, but my chest has been \
         hurting. I thought it was just my anxiety, but it turns out that I have developed \
         moderate GERD and my esophagus is the problem. I feel like this is making me more \
         anxious. How am I supposed to stay calm when I have a chronic disease that can mimic \
         heart and lung symptoms? I'm scared that I'm going to die. I don't want to die alone.",
    ),
    lore(
        10,
        "Journal",
        (500.0, 500.0), // kitchen dining table
        None,
        "04/15/2022\n\n\
         All I can think about is dying. It's almost funny. Sometimes I want to die, and then other \
         times I have a panic attack because I know I'll die someday and I feel like I'm wasting my \
         time, getting older and not doing anything. I've been gaining weight, and my physical \
         health issues are getting worse. I'm only 22, but I feel like I'm 50. I'm so tired of \
         this. I'm so tired of being tired.",
    ),
    lore(
        11,
        "Journal",
        (500.0, 3700.0), // balcony
        None,
        "05/01/2022\n\n\
         My medical marijuana card came today. It helps me manage the pain and the anxiety. I'm \
         not sure if it's the best thing for me, and I'm worried about what my mom will think if \
         she finds out, but it helps me relax and isn't nearly as addictive as Xanax.",
    ),
    lore(
        12,
        "Journal",
        (800.0, 3800.0), // balcony chair
        None,
        "01/15/2022\n\n\
         I had a really bad panic attack today. I was trying to call my doctor's office to \
         schedule an appointment to get my prescription refilled, but once I dialed the number and \
         the receptionist picked up, I couldn't speak. I felt like I was suffocating, and my heart \
         was racing. I ended up having to ask my roommate to make the call for me. I hate feeling \
         so helpless and out of control. I'm trying to remind myself that recovery isn't linear, \
         but it's hard not to feel discouraged. I'm going to try to be kind to myself and remember \
         that it's okay to have bad days.",
    ),
    lore(
        13,
        "Puzzle Complete",
        (860.0, 3860.0),
        None,
        "You have completed the puzzle. You have successfully managed to get through a panic \
         attack and get the help you needed.",
    ),
    lore(
        14,
        "Journal",
        (500.0, 3200.0), // bedroom desk
        None,
        "09/12/2022\n\n\
         I'm so happy. I somehow ended up in a situationship with the person I met in May. I'm not \
         sure what we are, but I'm happy. But there's a catch. She's moving away to a foreign \
         country in a few months. I'm not sure what to do. We're using 'I love you', and I really \
         mean it. I'm scared of being alone again.",
    ),
    lore(
        15,
        "Journal",
        (1000.0, 2000.0), // hallway
        None,
        "12/21/2022\n\n\
         Whelp. She left. I'm happy that she's happy, and pursuing her dreams, but I'm so empty. I \
         don't really know how to deal with this. Even more than that, I'm dreading the holidays \
         ahead. I'm going to be at my mom's house, because I feel bad leaving her alone for the \
         holidays, but she's also a trigger for my anxiety. She's the reason I have to stay here \
         in this town, because she's not well and I'm the only one who can take care of her.",
    ),
    lore(
        16,
        "Journal",
        (1350.0, 2800.0), // bedroom sound system
        Some(PuzzleId::CONVERSATION),
        "01/01/2023\n\n\
         That was awful. I'm so glad the holidays are over. I hate trying to dodge her questions \
         about my faith and my personal life. Our conversations are like minefields, and I'm \
         always on edge. I feel like I'm navigating a maze just to get through a conversation with \
         her. She's still my mother, and she still took care of me, and still needs me in her old \
         age. I'm not sure how much longer I can take this.",
    ),
    lore(
        17,
        "Puzzle Complete",
        (1410.0, 2860.0),
        None,
        "You have completed the puzzle. You have successfully navigated the stressful \
         conversation with your mother.",
    ),
];

/// Look up a lore object by ordinal
pub fn find(ordinal: u32) -> Option<&'static LoreObject> {
    LORE_TABLE.iter().find(|obj| obj.ordinal == ordinal)
}

/// Which lore objects the player has picked up this session
#[derive(Debug, Clone, Default)]
pub struct LoreProgress {
    collected: BTreeSet<u32>,
}

impl LoreProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// The single uncollected object currently shown in the house
    pub fn next_visible(&self) -> Option<&'static LoreObject> {
        LORE_TABLE
            .iter()
            .find(|obj| !self.collected.contains(&obj.ordinal))
    }

    /// Collected objects stay visible; of the rest only the next one shows
    pub fn is_visible(&self, ordinal: u32) -> bool {
        self.collected.contains(&ordinal)
            || self.next_visible().is_some_and(|obj| obj.ordinal == ordinal)
    }

    pub fn is_collected(&self, ordinal: u32) -> bool {
        self.collected.contains(&ordinal)
    }

    pub fn collected_count(&self) -> usize {
        self.collected.len()
    }

    /// True once every object in the table is collected
    pub fn is_complete(&self) -> bool {
        self.next_visible().is_none()
    }

    /// Pick up an object; only the next visible one can be collected
    pub fn collect(&mut self, ordinal: u32) -> Option<&'static LoreObject> {
        let next = self.next_visible()?;
        if next.ordinal != ordinal {
            log::debug!(
                "Lore object {} is not collectible yet (next is {})",
                ordinal,
                next.ordinal
            );
            return None;
        }
        self.collected.insert(ordinal);
        log::info!("Collected lore object {} ({})", next.ordinal, next.name);
        Some(next)
    }

    /// Next visible object if `pos` is within `reach` of it
    pub fn nearby(&self, pos: Vec2, reach: f32) -> Option<&'static LoreObject> {
        self.next_visible()
            .filter(|obj| obj.location.distance(pos) <= reach)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_and_dense() {
        for (i, obj) in LORE_TABLE.iter().enumerate() {
            assert_eq!(obj.ordinal, i as u32 + 1);
        }
    }

    #[test]
    fn test_puzzle_ids() {
        assert_eq!(find(5).and_then(|o| o.starts_puzzle), Some(PuzzleId::BED));
        assert_eq!(PuzzleId::BED.as_str(), "puzzle_1");
        assert_eq!(find(1).and_then(|o| o.starts_puzzle), None);
        let starters: Vec<u32> = LORE_TABLE
            .iter()
            .filter(|o| o.starts_puzzle.is_some())
            .map(|o| o.ordinal)
            .collect();
        assert_eq!(starters, vec![5, 16]);
        assert!(find(99).is_none());
    }

    #[test]
    fn test_reveal_in_ordinal_order() {
        let mut progress = LoreProgress::new();
        assert_eq!(progress.next_visible().map(|o| o.ordinal), Some(1));
        assert!(progress.is_visible(1));
        assert!(!progress.is_visible(2));

        // Out of order pickups are refused
        assert!(progress.collect(2).is_none());
        assert_eq!(progress.collected_count(), 0);

        assert_eq!(progress.collect(1).map(|o| o.ordinal), Some(1));
        assert!(progress.is_collected(1));
        assert!(progress.is_visible(1));
        assert!(progress.is_visible(2));
        assert!(!progress.is_visible(3));
    }

    #[test]
    fn test_collect_everything() {
        let mut progress = LoreProgress::new();
        for ordinal in 1..=17 {
            assert!(progress.collect(ordinal).is_some());
        }
        assert!(progress.is_complete());
        assert!(progress.next_visible().is_none());
        assert!(progress.collect(1).is_none());
    }

    #[test]
    fn test_nearby_only_finds_next_object() {
        let progress = LoreProgress::new();
        assert!(progress.nearby(Vec2::new(1410.0, 1700.0), 50.0).is_some());
        assert!(progress.nearby(Vec2::new(800.0, 2800.0), 50.0).is_none());
    }

    #[test]
    fn test_player_name_substitution() {
        let save = SaveData::new("Sam");
        let text = find(1).map(|o| o.text_for(&save)).unwrap();
        assert!(text.contains("Patient: Sam"));
        assert!(!text.contains(PLAYER_NAME_TOKEN));
    }
}
