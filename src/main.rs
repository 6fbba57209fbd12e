fn main() {
    if let Err(err) = areaviz::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
