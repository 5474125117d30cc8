// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_paste(size: usize) -> String {
    let base = "Project Overview\nWe deliver a new booking site.\n\n- Discovery workshop\n- **Design** sprint\n\n1. Build\n2. Launch\n\nService\tCost\tNote\nDesign\t$2,000\tfixed\nBuild\t$8,000\n\nTotal: $10,000\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_csv_table(rows: usize) -> String {
    let mut content = String::from("Quote\nItem,Qty,Price\n");
    for row in 0..rows {
        content.push_str(&format!("Line item {row},{},{}.00\n", row % 7 + 1, row * 15));
    }
    content
}

#[allow(dead_code)]
pub fn generate_editor_html(sections: usize) -> String {
    let mut html = String::new();
    for section in 0..sections {
        html.push_str(&format!("<h2>Section {section}</h2>"));
        html.push_str(
            "<p class=\"ql-align-justify\">Some <strong>bold</strong> and <em>italic</em> \
             text with <span style=\"color: rgb(230, 0, 0);\">colour</span>.</p>",
        );
        html.push_str("<ul><li>First &amp; foremost</li><li><u>Second</u></li></ul>");
    }
    html
}
