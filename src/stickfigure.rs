/// Stage shown once the figure is complete.
pub const FINAL_STAGE: u8 = 10;

/// Bounded counter behind the gallows drawing. The presentation layer steps
/// it forward once per wrong guess and may step it back for an undo; the two
/// directions are independent and neither is driven by [`GameSession`]
/// itself.
///
/// [`GameSession`]: crate::game::GameSession
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StickFigure {
    stage: u8,
}

impl StickFigure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the empty gallows. Called at the start of every round.
    pub fn reset(&mut self) {
        self.stage = 0;
    }

    /// Steps one stage forward, saturating at the final stage.
    pub fn advance(&mut self) -> u8 {
        if self.stage < FINAL_STAGE {
            self.stage += 1;
        }
        self.stage
    }

    /// Steps one stage back, saturating at zero.
    pub fn retreat(&mut self) -> u8 {
        self.stage = self.stage.saturating_sub(1);
        self.stage
    }

    pub fn current(&self) -> u8 {
        self.stage
    }
}
