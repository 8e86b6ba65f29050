use error_loom::prelude::*;

fn load_index() -> Result<(), ComposedError> {
    let io = errorf!("permission denied");
    Err(errorf!("open %s: %v", "/var/lib/index.db", io))
}

fn main() {
    println!("Running error-loom quick start...");

    let err = match load_index() {
        Ok(()) => return,
        Err(err) => err,
    };

    // 1. Default rendering: one line, levels joined by ": ".
    println!("\n1. Default:\n{err}");

    // 2. Detail rendering: one segment per level, each with its capture site.
    println!("\n2. Detail:\n{err:+}");

    // 3. Alternative verbs through the renderer directly.
    let mut quoted = FormatState::new();
    render_error(&mut quoted, Verb::Quote, &err);
    println!("\n3. Quoted:\n{}", quoted.as_str());

    let mut hex = FormatState::new();
    render_error(&mut hex, Verb::LowerHex, &err);
    println!("\n4. Hex:\n{}", hex.as_str());

    // 5. Detail mode via the adapter when only `&dyn ChainError` is at hand.
    let dynamic: &dyn ChainError = &err;
    println!("\n5. Adapter:\n{}", Detailed(dynamic));
}
