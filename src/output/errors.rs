pub fn make_errors(err: &anyhow::Error) -> String {
    let mut block = String::from("\n=== START ERRORS ===\n");
    for cause in err.chain() {
        block.push_str(&format!("{}\n", cause));
    }
    block.push_str("=== END ERRORS ===\n");
    block
}

pub fn print_errors(err: &anyhow::Error) {
    eprint!("{}", make_errors(err));
}
