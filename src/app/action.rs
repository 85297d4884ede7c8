use crate::app::command::Command;
use crate::app::state::PanelKind;
use crate::domain::source::TocSnapshot;

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Reader ---
    NextPage,        // Advance to the next entry in reading order
    PrevPage,        // Step back to the previous entry
    ToggleFavorite,  // Toggle the active entry as favorite
    Reload,          // Re-read the table of contents

    // --- Panels ---
    OpenPanel(PanelKind),                    // Open contents (t) or favorites (F)
    ClosePanel,                              // ESC while a panel is open
    PanelInput(crossterm::event::KeyEvent),  // Typing into the search box
    PanelCursorNext,
    PanelCursorPrev,
    PanelCursorJump(isize),                  // PageUp / PageDown
    PanelSelect,                             // Enter on the cursor row
    PanelClick(usize),                       // Mouse click on a visible row
    PanelToggleFavorite,                     // Ctrl-F on the cursor row

    // --- UI ---
    ToggleHelp,
    CycleTheme,
    DismissError,

    // --- Async Results ---
    TocLoaded(Box<TocSnapshot>),
    ErrorOccurred(String),
    FavoritesSaveFailed(String),
    ExternalChangeDetected,
}
