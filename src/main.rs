#![forbid(unsafe_code)]

fn main() -> std::process::ExitCode {
    let code = hash_test::run();
    std::process::ExitCode::from(code)
}
