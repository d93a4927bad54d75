// Leumi Card spreadsheet export (Excel 2003 XML)
//
//   <Workbook>
//     <Worksheet><Table>
//       <Row><Cell ss:StyleID="Header"><Data ss:Type="String">תאריך עסקה</Data></Cell>...</Row>
//       <Row><Cell><Data ss:Type="DateTime">2014-09-30T00:00:00</Data></Cell>...</Row>

use roxmltree::{Document, Node};

use super::{header_row, Layout, LayoutDecoder, RawRow};
use crate::encoding::normalize;
use crate::error::DecodeError;

pub struct LeumiCardXmlDecoder;

fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |n| n.is_element() && n.tag_name().name() == name)
}

fn cell_data(cell: Node<'_, '_>) -> String {
    children(cell, "Data")
        .next()
        .map(|data| {
            data.descendants()
                .filter(|n| n.is_text())
                .filter_map(|n| n.text())
                .collect::<String>()
        })
        .unwrap_or_default()
        .trim()
        .to_string()
}

impl LayoutDecoder for LeumiCardXmlDecoder {
    fn layout(&self) -> Layout {
        Layout::LeumiCardXml
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<RawRow>, DecodeError> {
        let text = normalize(bytes, self.layout().encoding())?;
        let doc = Document::parse(&text)?;

        let root = doc.root_element();
        if root.tag_name().name() != "Workbook" {
            return Err(DecodeError::NotAWorkbook(root.tag_name().name().to_string()));
        }

        let mut rows: Vec<RawRow> = children(root, "Worksheet")
            .flat_map(|sheet| children(sheet, "Table"))
            .flat_map(|table| children(table, "Row"))
            .map(|row| children(row, "Cell").map(cell_data).collect())
            .collect();

        if let Some(header) = rows.first_mut() {
            *header = header_row(std::mem::take(header));
        }
        Ok(rows)
    }
}
