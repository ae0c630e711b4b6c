/// Logical keys understood by the game, independent of the windowing backend.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
    P,
    Q,
    Escape,
    None,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MouseButton {
    Left,
    Right,
    Other,
}
