use crate::core::types::{AgeBracket, GradeBand};
use crate::errors::Result;
use crate::prompter::flows::selection::SelectionPrompt;

pub enum FlowCtrl {
    Continue,
    Finish,
    Abort,
}

pub trait Flow {
    fn render(&mut self) -> Result<()>;
    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl>;
}

/// Which single-dimension view is waiting for its sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewTarget {
    Band(GradeBand),
    Bracket(AgeBracket),
}

/// Where the menu flow currently is.
#[derive(Debug, Clone)]
pub enum MenuState {
    Menu,                       // show the menu, read 1-5
    GradePick,                  // A/B/C for the grade view
    AgePick,                    // senior/young for the age view
    ViewOrderPick(ViewTarget),  // asc/desc, then display the ranked view
    Selection(SelectionPrompt), // four-field filter/sort/export flow
}
