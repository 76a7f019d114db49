//! Console accuracy tables
//!
//! Fixed-width rows: operation name, worst observed distance in 2^-106
//! units, then the bit patterns of the worst input, result and reference.
//! Bit patterns print as hex so a row can be pasted straight into the
//! regression dataset.

const NAME_W: usize = 12;
const ULP_W: usize = 9;
const HEX_W: usize = 18;

pub fn hex(u: u64) -> String {
    format!("0x{:016x}", u)
}

pub fn format_header(cols: &[&str]) -> String {
    let mut s = format!("{:<NAME_W$} {:>ULP_W$}", "f", "ulp");
    for c in cols {
        s.push_str(&format!(" {:>HEX_W$}", c));
    }
    s
}

pub fn format_row(name: &str, ulp: f64, cells: &[u64]) -> String {
    let mut s = format!("{:<NAME_W$} {:>ULP_W$.4}", name, ulp);
    for c in cells {
        s.push_str(&format!(" {:>HEX_W$}", hex(*c)));
    }
    s
}

pub fn print_title(title: &str) {
    println!("\n{title}");
}

pub fn print_header(cols: &[&str]) {
    let h = format_header(cols);
    println!("{h}");
    println!("{}", "-".repeat(h.len()));
}

pub fn print_row(name: &str, ulp: f64, cells: &[u64]) {
    println!("{}", format_row(name, ulp, cells));
}
