/// User intents produced by the input layer and consumed by `App::update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Ctrl+C: leave without confirmation.
    ForceQuit,
    Tick,
    Resize,

    // Row cursor
    MoveUp,
    MoveDown,
    GoTop,
    GoBottom,

    // Pagination
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    Reload,

    // Selection
    ToggleRow,
    ToggleAllOnPage,
    OpenBulkSelect,
    ClearSelection,

    // Bulk-select popover entry
    CountInput(char),
    CountBackspace,
    CountSubmit,

    ToggleTheme,
    ToggleHelp,
    ToggleDetail,
    NavigateBack,
    ClickAt(u16, u16),
    None,
}
