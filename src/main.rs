fn main() {
    if let Err(err) = survey_figures::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
