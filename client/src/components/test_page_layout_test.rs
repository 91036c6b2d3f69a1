use super::*;

#[test]
fn nav_items_are_absolute_and_unique() {
    let mut hrefs: Vec<&str> = NAV_ITEMS.iter().map(|(_, href)| *href).collect();
    assert!(hrefs.iter().all(|h| h.starts_with('/')));
    hrefs.sort_unstable();
    hrefs.dedup();
    assert_eq!(hrefs.len(), NAV_ITEMS.len());
}
