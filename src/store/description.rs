use std::sync::OnceLock;

use regex::Regex;

/// Extract a field from the HTML attribute table embedded in a boundary
/// feature's `Description` (`<th>FIELD</th> <td>VALUE</td>`).
pub(crate) fn description_field(description: &str, field: &str) -> Option<String> {
    static ROW: OnceLock<Regex> = OnceLock::new();
    let row = ROW.get_or_init(|| {
        Regex::new(r"(?is)<th[^>]*>\s*([^<]*?)\s*</th>\s*<td[^>]*>(.*?)</td>").expect("valid regex")
    });

    row.captures_iter(description)
        .find(|caps| caps[1].eq_ignore_ascii_case(field))
        .map(|caps| caps[2].trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::description_field;

    const DESCRIPTION: &str = "<center><table><tr><th colspan='2' align='center'><em>Attributes</em></th></tr>\
        <tr bgcolor=\"#E3E3F3\"> <th>ED_DESC</th> <td>ALJUNIED</td> </tr>\
        <tr bgcolor=\"\"> <th>INC_CRC</th> <td>A1B2C3</td> </tr></table></center>";

    #[test]
    fn extracts_named_cell() {
        assert_eq!(description_field(DESCRIPTION, "ED_DESC").as_deref(), Some("ALJUNIED"));
        assert_eq!(description_field(DESCRIPTION, "INC_CRC").as_deref(), Some("A1B2C3"));
    }

    #[test]
    fn missing_field_is_none() {
        assert_eq!(description_field(DESCRIPTION, "NAME"), None);
        assert_eq!(description_field("plain text", "ED_DESC"), None);
    }
}
