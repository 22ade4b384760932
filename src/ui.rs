//! Full-screen text page with a single button
//!
//! Used for puzzle intros and outros. Drawing goes through [`Surface`] and
//! clicks are plain points, so the host decides how input arrives.

use glam::Vec2;

use crate::lore::{LoreObject, PuzzleId};
use crate::renderer::{Palette, Surface};
use crate::save::SaveData;
use crate::sim::point_in_rect;

pub const BUTTON_SIZE: Vec2 = Vec2::new(100.0, 50.0);
/// Button center sits this far below the screen center
pub const BUTTON_OFFSET_Y: f32 = 100.0;
pub const TEXT_SIZE: f32 = 36.0;
pub const BUTTON_TEXT_SIZE: f32 = 30.0;

const BED_INTRO: &str = "This puzzle is about the experience of trying to get out of bed and do \
basic daily tasks while struggling with depression. It can be hard to do this for people with \
depression, as it is hard to gather the motivation to start the day, and it is easy to stay \
there, skip classes, and not do anything, which can make the depression worse.\n\n\
To complete this puzzle, you need to turn all of the circles green by using WASD to move the \
player around. But be careful, the circles have a timer, and you will need to return to \
re-activate them if you are not fast enough. I chose this puzzle mechanic because I believe it \
is a good simulator of how hard it can be to reach the critical mass of motivation to get out \
of bed and do things.";

const PHONE_CALL_INTRO: &str = "This puzzle is about how difficult it can be to navigate basic \
life tasks while struggling with social anxiety. Even a simple task such as calling the doctor \
to make an appointment can be a daunting task for someone with social anxiety. It can be hard \
to remember what to say, and the resulting perceived embarrassment can be a huge deterrent to \
making the call. I often forget what I want to say when I make calls, and I have to write down \
a script to read from. Intrusive negative thoughts can result in a thought loop, causing you to \
freeze up and become unable to talk.\n\n\
To be able to complete this puzzle, you'll be shown a question that you need to answer. You'll \
be presented choices, but they will move around the screen, and you will need to try to click \
the right one to answer the question correctly. There will be one right answer, and a lot of \
incorrect ones, or intrusive thoughts that make it harder to track the right thought and answer \
the question. I chose this puzzle mechanic because I believe it simulates the difficulty of \
sifting through intrusive looping thoughts to get a word out.";

/// Intro page text for a puzzle, if it has one
pub fn puzzle_intro_text(puzzle: &PuzzleId) -> Option<&'static str> {
    match *puzzle {
        PuzzleId::BED => Some(BED_INTRO),
        PuzzleId::PHONE_CALL => Some(PHONE_CALL_INTRO),
        _ => None,
    }
}

/// A page of centered text with one clickable button
#[derive(Debug, Clone, PartialEq)]
pub struct TextScreen {
    text: String,
    button_text: String,
    screen_center: Vec2,
    button_origin: Vec2,
}

impl TextScreen {
    pub fn new(
        text: impl Into<String>,
        button_text: impl Into<String>,
        screen_size: (u32, u32),
    ) -> Self {
        // Integer halves, like the rest of the layout math
        let screen_center = Vec2::new((screen_size.0 / 2) as f32, (screen_size.1 / 2) as f32);
        let button_center = screen_center + Vec2::new(0.0, BUTTON_OFFSET_Y);
        Self {
            text: text.into(),
            button_text: button_text.into(),
            screen_center,
            button_origin: button_center - BUTTON_SIZE / 2.0,
        }
    }

    /// Intro page for a puzzle with an "OK" button
    pub fn intro(puzzle: &PuzzleId, screen_size: (u32, u32)) -> Option<Self> {
        puzzle_intro_text(puzzle).map(|text| Self::new(text, "OK", screen_size))
    }

    /// Page showing a lore object, e.g. the outro after a puzzle is solved
    pub fn lore(obj: &LoreObject, save: &SaveData, screen_size: (u32, u32)) -> Self {
        Self::new(
            format!("{}\n\n{}", obj.name, obj.text_for(save)),
            "OK",
            screen_size,
        )
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn button_text(&self) -> &str {
        &self.button_text
    }

    /// Top-left corner and size of the button
    pub fn button_rect(&self) -> (Vec2, Vec2) {
        (self.button_origin, BUTTON_SIZE)
    }

    pub fn draw(&self, surface: &mut dyn Surface, palette: &Palette) {
        surface.draw_text(&self.text, self.screen_center, TEXT_SIZE, palette.text);
        surface.fill_rect(self.button_origin, BUTTON_SIZE, palette.button);
        surface.draw_text(
            &self.button_text,
            self.button_origin + BUTTON_SIZE / 2.0,
            BUTTON_TEXT_SIZE,
            palette.button_text,
        );
    }

    /// True when a click at `pos` lands on the button
    pub fn handle_click(&self, pos: Vec2) -> bool {
        let pressed = point_in_rect(pos, self.button_origin, BUTTON_SIZE);
        if pressed {
            log::debug!("Text screen button '{}' pressed", self.button_text);
        }
        pressed
    }
}
