fn main() {
    // Delegate to CLI runner; errors are printed nicely inside.
    match fmtgate::cli::run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
