#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a batch root with an empty `input/` folder.
pub fn setup_root() -> TempDir {
    let root = TempDir::new().expect("create temp dir");
    fs::create_dir(root.path().join("input")).expect("create input dir");
    root
}

pub fn add_input(root: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = root.join("input").join(name);
    fs::write(&path, bytes).expect("write input file");
    path
}

pub fn read_output(root: &Path, name: &str) -> String {
    fs::read_to_string(root.join("output").join(name)).expect("read output file")
}

fn utf16le(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

fn iso8859_8(text: &str) -> Vec<u8> {
    let (bytes, _, unmappable) = encoding_rs::ISO_8859_8_I.encode(text);
    assert!(!unmappable, "fixture text must fit ISO-8859-8");
    bytes.into_owned()
}

fn tr(cells: &[&str]) -> String {
    let cells: String = cells.iter().map(|c| format!("<td>{}</td>", c)).collect();
    format!("<tr>{}</tr>\n", cells)
}

fn page(body: &str) -> String {
    format!("<html><head><title>statement</title></head><body>\n{}</body></html>\n", body)
}

// ============================================================================
// STATEMENTS
// ============================================================================

pub const CAL_CSV: &str = "Date,Payee,Category,Memo,Outflow,Inflow\n\
05/01/2024,שופרסל דיל,,,120,\n\
12/01/2024,ביטוח ישיר,,הוראת קבע,1250.5,\n\
18/01/2024,החזר ביטוח,,זיכוי,,80\n";

pub fn cal_statement() -> Vec<u8> {
    cal_page(&[
        tr(&["05/01/24", "שופרסל דיל", "120.00", "120.00", ""]),
        tr(&["12/01/24", "ביטוח ישיר", "1,250.50", "1,250.50", "הוראת קבע"]),
        tr(&["18/01/24", "החזר ביטוח", "-80.00", "-80.00", "זיכוי"]),
    ])
}

/// A Cal grid with its header and totals row but no transactions.
pub fn cal_header_only() -> Vec<u8> {
    cal_page(&[])
}

fn cal_page(rows: &[String]) -> Vec<u8> {
    let body = format!(
        "<table id=\"tdCalGrid\">\n\
         <thead><tr><th>תאריך העסקה</th><th>שם בית העסק</th><th>סכום העסקה</th><th>סכום החיוב</th><th>פירוט נוסף</th></tr></thead>\n\
         <tbody>\n{}\
         <tr><td class=\"footer_cell_total\">סה\"כ</td><td></td><td></td><td>1,290.50</td><td></td></tr>\n\
         </tbody></table>\n",
        rows.concat(),
    );
    utf16le(&page(&body))
}

pub const LEUMI_CHECKING_CSV: &str = "Date,Payee,Category,Memo,Outflow,Inflow\n\
01/01/2024,משכורת,,99001,,12500\n\
05/01/2024,חברת חשמל,,4411,350,\n\
20/01/2024,הוראת קבע ועד בית,,4412,120,\n";

pub fn leumi_checking_statement() -> Vec<u8> {
    let chrome: String = ["בנק לאומי", "תנועות בחשבון", "חשבון 800-12345/67", "הופק 31/01/2024"]
        .iter()
        .map(|r| tr(&[*r]))
        .collect();
    let body = format!(
        "<table>\n{}</table>\n\
         <table id=\"ctlActivityTable\">\n\
         <tr class=\"header\"><th>תאריך</th><th>תאריך ערך</th><th>תיאור</th><th>אסמכתא</th>\
         <th>חובה</th><th>זכות</th><th>היתרה בש''ח</th></tr>\n\
         {}{}{}\
         <tr><td class=\"footer_cell_total\">סה\"כ</td><td></td><td></td><td></td><td></td><td></td><td></td></tr>\n\
         </table>\n",
        chrome,
        tr(&["01/01/2024", "01/01/2024", "משכורת", "99001", "", "12,500.00", "15,000.00"]),
        tr(&["05/01/2024", "05/01/2024", "חברת חשמל", "4411", "350.00", "", "14,650.00"]),
        tr(&["20/01/2024", "21/01/2024", "הוראת קבע ועד בית", "4412", "120.00", "", "14,530.00"]),
    );
    page(&body).into_bytes()
}

/// The card fee row has no date and is pinned into the statement month.
pub const ISRACARD_CSV: &str = "Date,Payee,Category,Memo,Outflow,Inflow\n\
03/01/2024,רמי לוי,,,245.3,\n\
08/01/2024,זארה,,זיכוי,,35.9\n\
20/01/2024,דמי כרטיס,,,9.9,\n\
15/01/2024,פז,,,150,\n";

pub fn isracard_statement() -> Vec<u8> {
    let body = format!(
        "<table>\n{}{}{}{}{}{}{}{}{}{}</table>\n",
        tr(&["ישראכרט"]),
        tr(&["פירוט עסקאות"]),
        tr(&["כרטיס 1234"]),
        tr(&["תאריך רכישה", "שם בית עסק", "סכום עסקה", "סכום לחיוב", "", "פירוט נוסף"]),
        tr(&["עסקאות בארץ"]),
        tr(&["03/01/24", "\u{200f}רמי לוי", "245.30", "245.30", "", ""]),
        tr(&["08/01/24", "\u{200f}זארה", "-35.90", "-35.90", "", "זיכוי"]),
        tr(&["", "\u{200f}דמי כרטיס", "9.90", "9.90", "", ""]),
        tr(&["15/01/24", "\u{200f}פז", "150.00", "150.00", "", ""]),
        tr(&["", "\u{200f}סך חיוב בש\"ח:", "", "369.30", "", ""]),
    );
    iso8859_8(&page(&body))
}
