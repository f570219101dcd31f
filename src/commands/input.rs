use crate::adb::input;
use crate::cli::InputCommands;
use crate::commands::finish;
use crate::error::Result;

pub async fn run(cmd: InputCommands, serial: Option<&str>) -> Result<()> {
    match cmd {
        InputCommands::Text { text } => finish(input::text(&text, serial).await),
        InputCommands::Key { keycode } => finish(input::keyevent(keycode, serial).await),
        InputCommands::Tap { x, y } => finish(input::tap(x, y, serial).await),
        InputCommands::Swipe {
            x1,
            y1,
            x2,
            y2,
            duration,
        } => finish(input::swipe(x1, y1, x2, y2, duration, serial).await),
    }
}
