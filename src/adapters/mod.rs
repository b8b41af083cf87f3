mod recording_console;
mod stdout_console;

pub use recording_console::RecordingConsole;
pub use stdout_console::StdoutConsole;
