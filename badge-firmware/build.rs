// Build-Script: Wird vor dem Kompilieren ausgeführt
// Konfiguriert den Linker für das ESP32-C6 Badge

fn main() {
    // Hinweise bei Linker-Fehlern ausgeben
    linker_hints();

    // defmt.x - Symbole für das binäre defmt Log-Format
    println!("cargo:rustc-link-arg=-Tdefmt.x");

    // linkall.x - Flash/RAM-Layout, muss als LETZTES kommen
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

// Wird vom Linker als "--error-handling-script" mit (Fehler-Typ, Symbol) aufgerufen
fn linker_hints() {
    let args: Vec<String> = std::env::args().collect();

    if let [_, kind, what, ..] = args.as_slice() {
        if kind == "undefined-symbol" {
            if what.starts_with("_defmt_") {
                eprintln!();
                eprintln!("💡 `defmt` not found - is `defmt.x` added as a linker script?");
                eprintln!();
            } else if what == "_stack_start" {
                eprintln!();
                eprintln!("💡 Is the linker script `linkall.x` missing?");
                eprintln!();
            } else if what.starts_with("esp_rtos_") {
                eprintln!();
                eprintln!("💡 `esp-rtos` was not started - call `esp_rtos::start()` in main.");
                eprintln!();
            }
            std::process::exit(0);
        }
        std::process::exit(1);
    }

    println!(
        "cargo:rustc-link-arg=--error-handling-script={}",
        std::env::current_exe().unwrap().display()
    );
}
