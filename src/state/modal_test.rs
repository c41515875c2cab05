use super::*;

#[test]
fn doc_variants_are_distinct() {
    assert_ne!(LegalDoc::Terms, LegalDoc::DataPolicy);
    assert_ne!(LegalDoc::Terms, LegalDoc::Privacy);
    assert_ne!(LegalDoc::DataPolicy, LegalDoc::Privacy);
}
