// Statement fixtures for decoder tests, encoded the way each issuer serves them.

pub(crate) fn utf16le(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

pub(crate) fn iso8859_8(text: &str) -> Vec<u8> {
    let (bytes, _, unmappable) = encoding_rs::ISO_8859_8_I.encode(text);
    assert!(!unmappable, "fixture text must fit ISO-8859-8");
    bytes.into_owned()
}

fn tr(cells: &[&str]) -> String {
    let cells: String = cells.iter().map(|c| format!("<td>{}</td>", c)).collect();
    format!("<tr>{}</tr>\n", cells)
}

fn th_row(class: &str, cells: &[&str]) -> String {
    let cells: String = cells.iter().map(|c| format!("<th>{}</th>", c)).collect();
    format!("<tr class=\"{}\">{}</tr>\n", class, cells)
}

/// Page chrome of the online-banking exports: single-cell layout rows.
fn leumi_chrome() -> String {
    let rows: String = [
        "בנק לאומי",
        "תנועות בחשבון",
        "חשבון 800-12345/67",
        "הופק בתאריך 31/01/2024",
    ]
    .iter()
    .map(|r| tr(&[*r]))
    .collect();
    format!("<table class=\"layout\">\n{}</table>\n", rows)
}

fn activity_table() -> String {
    format!(
        "<table id=\"ctlActivityTable\">\n{}{}{}{}{}</table>\n",
        th_row(
            "header",
            &["תאריך", "תאריך ערך", "תיאור", "אסמכתא", "חובה", "זכות", "היתרה בש''ח", ""],
        ),
        tr(&["01/01/2024", "01/01/2024", "משכורת", "99001", "", "12,500.00", "15,000.00", ""]),
        tr(&["05/01/2024", "05/01/2024", "חברת חשמל", "4411", "350.00", "", "14,650.00", ""]),
        tr(&["20/01/2024", "21/01/2024", "הוראת קבע ועד בית", "4412", "120.00", "", "14,530.00", ""]),
        "<tr class=\"footer\"><td class=\"footer_cell_total\">סה\"כ</td><td></td><td></td><td></td>\
         <td>470.00</td><td>12,500.00</td><td></td><td></td></tr>\n",
    )
}

fn item(cells: &[&str]) -> String {
    tr(cells).replacen("<tr>", "<tr class=\"alternatingItem\">", 1)
}

fn card_table() -> String {
    format!(
        "<table id=\"ctlRegularTransactions\">\n{}{}{}{}</table>\n",
        th_row(
            "header",
            &["תאריך העסקה", "שם בית העסק", "סכום העסקה", "סכום החיוב", "פירוט נוסף"],
        ),
        item(&["02/01/24", "מקדונלדס", "54.00", "54.00", ""]),
        item(&["09/01/24", "פז דלק", "300.00", "300.00", "תשלום 1 מתוך 3"]),
        "<tr class=\"alternatingItem\"><td class=\"footer_cell_total\">סה\"כ</td><td></td>\
         <td></td><td>354.00</td><td></td></tr>\n",
    )
}

fn page(body: &str) -> String {
    format!("<html>\n<head><title>export</title></head>\n<body>\n{}</body>\n</html>\n", body)
}

pub(crate) fn leumicard_xml() -> Vec<u8> {
    let cell = |ty: &str, value: &str| {
        format!("<Cell><Data ss:Type=\"{}\">{}</Data></Cell>", ty, value)
    };
    let header: String = [
        "תאריך עסקה",
        "תאריך חיוב",
        "שם בית העסק",
        "סוג עסקה",
        "מטבע עסקה",
        "סכום עסקה",
        "סכום חיוב ₪",
        "הערות",
    ]
    .iter()
    .map(|label| format!("<Cell ss:StyleID=\"Header\"><Data ss:Type=\"String\">{}</Data></Cell>", label))
    .collect();

    let first = [
        cell("DateTime", "2014-09-30T00:00:00"),
        cell("DateTime", "2015-08-16T00:00:00"),
        cell("String", "כללית סמייל בית שמש"),
        cell("String", "תשלומים"),
        cell("String", "₪"),
        cell("String", "3229.00"),
        cell("Number", "215"),
        cell("String", "תשלום 11 מתוך 15"),
        "<Cell/>".to_string(),
    ]
    .concat();
    let second = [
        cell("DateTime", "2015-08-02T00:00:00"),
        cell("DateTime", "2015-08-16T00:00:00"),
        cell("String", "זארה"),
        cell("String", "זיכוי"),
        cell("String", "₪"),
        cell("String", "-50.5"),
        cell("Number", "-50.5"),
        cell("String", ""),
        "<Cell/>".to_string(),
    ]
    .concat();

    format!(
        "<?xml version=\"1.0\"?>\n\
         <?mso-application progid=\"Excel.Sheet\"?>\n\
         <Workbook xmlns=\"urn:schemas-microsoft-com:office:spreadsheet\" \
         xmlns:ss=\"urn:schemas-microsoft-com:office:spreadsheet\">\n\
         <Worksheet ss:Name=\"פירוט עסקאות\"><Table>\n\
         <Row>{}<Cell ss:StyleID=\"Header\"/></Row>\n\
         <Row>{}</Row>\n\
         <Row>{}</Row>\n\
         </Table></Worksheet>\n\
         </Workbook>\n",
        header, first, second
    )
    .into_bytes()
}

pub(crate) fn cal_html() -> Vec<u8> {
    let body = format!(
        "<table>{}</table>\n\
         <table id=\"tdCalGrid\">\n\
         <thead><tr><th>תאריך העסקה</th><th>שם בית העסק</th><th>סכום העסקה</th><th>סכום החיוב</th><th></th></tr></thead>\n\
         <tbody>\n{}{}\
         <tr><td class=\"footer_cell_total\">סה\"כ</td><td></td><td></td><td>1,370.50</td><td></td></tr>\n\
         {}</tbody></table>\n",
        tr(&["כאל - פירוט עסקאות"]),
        tr(&["05/01/24", "שופרסל דיל", "120.00", "120.00", ""]),
        tr(&["12/01/24", "ביטוח ישיר", "1,250.50", "1,250.50", "הוראת קבע"]),
        tr(&["99/99/99", "after footer", "0", "0", ""]),
    );
    utf16le(&page(&body))
}

pub(crate) fn mizrahi_html() -> Vec<u8> {
    let preamble: String = [
        "בנק מזרחי טפחות",
        "פירוט עסקאות בכרטיס אשראי",
        "לקוח: ישראל ישראלי",
        "חשבון: 123456",
        "סוג כרטיס: ויזה",
        "מועד חיוב: 02/02/24",
        "",
    ]
    .iter()
    .map(|r| tr(&[*r]))
    .collect();

    let body = format!(
        "<table>\n{}</table>\n<table>\n{}{}{}{}{}{}</table>\n",
        preamble,
        tr(&["תאריך עסקה", "שם בית עסק", "סכום עסקה", "סכום חיוב ₪", "", "פרטים"]),
        tr(&["10/01/24", "\u{200f}סופר פארם", "89.90", "89.90", "", ""]),
        tr(&["14/01/24", "\u{200f}אגד", "-15.00", "-15.00", "", "זיכוי"]),
        tr(&["", "\u{200f}עמלת כרטיס", "12.00", "12.00", "", ""]),
        tr(&["כרטיס:", "1234", "", "86.90", "", ""]),
        tr(&["20/01/24", "after summary", "1", "1", "", ""]),
    );
    utf16le(&page(&body))
}

pub(crate) fn isracard_html() -> Vec<u8> {
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
        tr(&["", "\u{200f}סך חיוב בש\"ח:", "", "219.30", "", ""]),
        tr(&["סוף הדף"]),
    );
    iso8859_8(&page(&body))
}

pub(crate) fn leumi_checking_html() -> Vec<u8> {
    page(&format!("{}{}", leumi_chrome(), activity_table())).into_bytes()
}

pub(crate) fn leumicard_html() -> Vec<u8> {
    page(&format!("{}{}", leumi_chrome(), card_table())).into_bytes()
}

/// Both Leumi grids on one page.
pub(crate) fn leumi_ambiguous_html() -> Vec<u8> {
    page(&format!("{}{}{}", leumi_chrome(), activity_table(), card_table())).into_bytes()
}
