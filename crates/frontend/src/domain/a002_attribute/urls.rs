pub const ATTRIBUTE_SECTION: &str = "/attributes";

pub fn attribute_url(id: &str) -> String {
    format!("{}/{}", ATTRIBUTE_SECTION, urlencoding::encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_url_encodes_id() {
        assert_eq!(attribute_url("12"), "/attributes/12");
        assert_eq!(attribute_url("a/b"), "/attributes/a%2Fb");
    }
}
