//! End-to-end flows against an in-memory page.

use std::cell::RefCell;

use leetx_core::sort_filter::{SortFilterPage, apply};
use leetx_core::{
    Action, KeyInput, Resolution, Shortcuts, Side, SortFilterError, SortFilterOption,
};

/// Fake page: fixed widgets, records navigations, and re-renders the sort
/// label the way the site does after a navigation.
struct MemoryPage {
    url: RefCell<String>,
    sort: RefCell<Vec<SortFilterOption>>,
    filter: Vec<SortFilterOption>,
    navigations: RefCell<Vec<String>>,
}

impl MemoryPage {
    fn search_results() -> Self {
        Self {
            url: RefCell::new("https://1337x.to/search/ubuntu/1/".to_string()),
            sort: RefCell::new(vec![
                SortFilterOption::new("/sort-search/ubuntu/time/desc/1/", "Sort by time desc")
                    .selected(),
                SortFilterOption::new("/sort-search/ubuntu/size/desc/1/", "Size desc"),
                SortFilterOption::new("/sort-search/ubuntu/seeders/desc/1/", "Seeders desc"),
            ]),
            filter: vec![
                SortFilterOption::new("/search/ubuntu/1/", "All").selected(),
                SortFilterOption::new("/category-search/ubuntu/Movies/1/", "Movies"),
                SortFilterOption::new("/category-search/ubuntu/TV/1/", "TV"),
            ],
            navigations: RefCell::new(Vec::new()),
        }
    }

    fn run(&self, shortcuts: &Shortcuts, input: KeyInput) -> Option<Result<Resolution, SortFilterError>> {
        match shortcuts.dispatch(&input)? {
            Action::SortFilter(request) => Some(apply(self, request)),
            _ => None,
        }
    }
}

impl SortFilterPage for MemoryPage {
    fn options(&self, side: Side) -> Vec<SortFilterOption> {
        match side {
            Side::Right => self.sort.borrow().clone(),
            Side::Left => self.filter.clone(),
        }
    }

    fn current_url(&self) -> String {
        self.url.borrow().clone()
    }

    fn navigate(&self, url: &str) {
        self.navigations.borrow_mut().push(url.to_string());
        *self.url.borrow_mut() = url.to_string();
        // Server renders the applied sort as the first option's label.
        if let Some(first) = self.sort.borrow_mut().first_mut() {
            first.display_text = match url {
                u if u.contains("/size/desc/") => "Sort by size desc".to_string(),
                u if u.contains("/size/asc/") => "Sort by size asc".to_string(),
                _ => first.display_text.clone(),
            };
        }
    }
}

#[test]
fn sort_shortcut_navigates_once_then_is_idempotent() {
    let shortcuts = Shortcuts::configured().unwrap();
    let page = MemoryPage::search_results();

    let first = page.run(&shortcuts, KeyInput::plain("F").with_shift());
    assert_eq!(
        first,
        Some(Ok(Resolution::Navigate(
            "https://1337x.to/sort-search/ubuntu/size/desc/1/".to_string()
        )))
    );

    let second = page.run(&shortcuts, KeyInput::plain("F").with_shift());
    assert_eq!(second, Some(Ok(Resolution::AlreadySatisfied)));
    assert_eq!(page.navigations.borrow().len(), 1);
}

#[test]
fn ascending_sort_rewrites_only_the_order_token() {
    let shortcuts = Shortcuts::configured().unwrap();
    let page = MemoryPage::search_results();

    let result = page.run(&shortcuts, KeyInput::plain("G").with_shift());
    assert_eq!(
        result,
        Some(Ok(Resolution::Navigate(
            "https://1337x.to/sort-search/ubuntu/size/asc/1/".to_string()
        )))
    );
}

#[test]
fn filter_shortcut_keeps_host_and_query() {
    let shortcuts = Shortcuts::configured().unwrap();
    let page = MemoryPage::search_results();
    *page.url.borrow_mut() = "https://1337x.to/search/ubuntu/1/?page=2".to_string();

    let result = page.run(&shortcuts, KeyInput::plain("d"));
    assert_eq!(
        result,
        Some(Ok(Resolution::Navigate(
            "https://1337x.to/category-search/ubuntu/Movies/1/?page=2".to_string()
        )))
    );
}

#[test]
fn missing_filter_category_does_not_navigate() {
    let page = MemoryPage {
        filter: vec![SortFilterOption::new("/search/ubuntu/1/", "All").selected()],
        ..MemoryPage::search_results()
    };
    let shortcuts = Shortcuts::configured().unwrap();

    let result = page.run(&shortcuts, KeyInput::plain("a"));
    assert_eq!(
        result,
        Some(Err(SortFilterError::NoMatchFound {
            category: "TV".to_string(),
            side: Side::Left,
        }))
    );
    assert!(page.navigations.borrow().is_empty());
}

#[test]
fn page_without_widgets_reports_no_options() {
    let page = MemoryPage {
        sort: RefCell::new(Vec::new()),
        ..MemoryPage::search_results()
    };
    let shortcuts = Shortcuts::configured().unwrap();

    let result = page.run(&shortcuts, KeyInput::plain("F").with_shift());
    assert_eq!(
        result,
        Some(Err(SortFilterError::NoOptionsFound { side: Side::Right }))
    );
    assert!(page.navigations.borrow().is_empty());
}

#[test]
fn typing_in_search_box_does_not_steal_focus() {
    let shortcuts = Shortcuts::configured().unwrap();
    assert_eq!(shortcuts.dispatch(&KeyInput::plain("f")), Some(&Action::FocusSearch));
    assert_eq!(shortcuts.dispatch(&KeyInput::plain("f").in_text_field()), None);
}
