use std::process::ExitCode;

fn main() -> ExitCode {
    match notion_inbox::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
