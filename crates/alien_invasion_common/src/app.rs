use crate::key::{Key, MouseButton};

pub trait App {
    fn init(&mut self);
    fn update(&mut self, screen: &mut [u8]);
    fn handle_key_event(&mut self, key: Key, is_down: bool);
    /// Coordinates are in logical (unscaled) screen pixels.
    fn handle_mouse_click(&mut self, _button: MouseButton, _x: i32, _y: i32) {}
    fn should_exit(&self) -> bool;
    fn exit(&mut self);

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn scale(&self) -> u32;
    fn fps(&self) -> u32 {
        60
    }
    fn title(&self) -> String;
}
