//! Injection of the `ml dl` column into listing tables.

use leetx_core::column::{ColumnCell, FirstColumnCell, ListingMode, plan_column};
use leetx_core::config::table::{BUTTONS_CLASS, COLUMN_CLASS, FIRST_COLUMN, HREF_ATTR, WRAPPER};
use leetx_core::link::{LinkKind, ResolveLink};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlAnchorElement};

use super::dom;

/// Insert the column into every listing table; returns the cells inserted.
pub fn append_columns(document: &Document, page_url: &str) -> usize {
    let mode = ListingMode::from_url(page_url);
    let mut inserted = 0;

    for wrapper in dom::elements(document.query_selector_all(WRAPPER)) {
        let originals = dom::elements(wrapper.query_selector_all(FIRST_COLUMN));
        let snapshots: Vec<FirstColumnCell> = originals.iter().map(snapshot).collect();

        for (original, planned) in originals.iter().zip(plan_column(mode, &snapshots)) {
            match build_cell(document, &planned)
                .and_then(|cell| original.insert_adjacent_element("afterend", &cell))
            {
                Ok(_) => inserted += 1,
                Err(e) => web_sys::console::warn_2(&"Failed to insert column cell:".into(), &e),
            }
        }
    }

    inserted
}

fn snapshot(cell: &Element) -> FirstColumnCell {
    let first = cell.first_element_child();
    let second = first.as_ref().and_then(Element::next_element_sibling);
    FirstColumnCell {
        first_link: first.as_ref().and_then(anchor_href),
        second_link: second.as_ref().and_then(anchor_href),
    }
}

/// Resolved `href` property of an anchor.
fn anchor_href(element: &Element) -> Option<String> {
    element.dyn_ref::<HtmlAnchorElement>().map(HtmlAnchorElement::href)
}

fn build_cell(document: &Document, planned: &ColumnCell) -> Result<Element, JsValue> {
    let cell = document.create_element(planned.tag())?;
    cell.class_list().add_1(COLUMN_CLASS)?;

    match planned {
        ColumnCell::Header { title } => cell.set_text_content(Some(*title)),
        ColumnCell::Triggers { href } => {
            cell.class_list().add_1(BUTTONS_CLASS)?;
            for kind in planned.triggers() {
                let trigger = build_trigger(document, *kind, href)?;
                cell.append_child(&trigger)?;
            }
        }
    }

    Ok(cell)
}

/// Inert anchor carrying the torrent page URL as data.
fn build_trigger(document: &Document, kind: LinkKind, href: &str) -> Result<Element, JsValue> {
    let anchor = document.create_element("a")?;
    anchor.set_class_name(kind.trigger_class());
    anchor.set_attribute(HREF_ATTR, href)?;
    anchor.set_attribute("href", "javascript:void(0)")?;
    anchor.set_attribute("title", kind.title())?;

    let icon = document.create_element("i")?;
    icon.set_class_name(kind.icon_class());
    anchor.append_child(&icon)?;

    Ok(anchor)
}

/// Command for a click on (or inside) a trigger anchor.
pub fn trigger_command(target: Option<EventTarget>) -> Option<ResolveLink> {
    let selector = format!(
        ".{}, .{}",
        LinkKind::Magnet.trigger_class(),
        LinkKind::DirectDownload.trigger_class()
    );
    let trigger = target?
        .dyn_into::<Element>()
        .ok()?
        .closest(&selector)
        .ok()
        .flatten()?;

    Some(ResolveLink {
        kind: LinkKind::from_class_name(&trigger.class_name())?,
        href: trigger.get_attribute(HREF_ATTR)?,
    })
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn listing(document: &Document, html: &str) -> Element {
        let wrapper = document.create_element("div").unwrap();
        wrapper.set_class_name("table-list-wrap");
        wrapper.set_inner_html(html);
        document.body().unwrap().append_child(&wrapper).unwrap();
        wrapper
    }

    #[wasm_bindgen_test]
    fn test_standard_listing_gets_header_and_triggers() {
        let document = dom::document().unwrap();
        let wrapper = listing(
            &document,
            r#"<table class="table-list">
                 <thead><tr><th>name</th><th>se</th></tr></thead>
                 <tbody>
                   <tr><td class="name"><a href="/sub/1/0/">i</a><a href="/torrent/1/a/">A</a></td><td>1</td></tr>
                   <tr class="blank"><td></td></tr>
                 </tbody>
               </table>"#,
        );

        assert_eq!(append_columns(&document, "https://1337x.to/search/a/1/"), 2);

        let header = wrapper.query_selector("thead th:nth-child(2)").unwrap().unwrap();
        assert_eq!(header.tag_name(), "TH");
        assert_eq!(header.text_content().unwrap(), "ml\u{a0}dl");

        let magnet = wrapper.query_selector(".list-button-magnet").unwrap().unwrap();
        assert!(magnet.get_attribute(HREF_ATTR).unwrap().ends_with("/torrent/1/a/"));
        assert_eq!(
            wrapper.query_selector_all(".dl-buttons").unwrap().length(),
            1
        );

        let command = trigger_command(Some(magnet.into())).unwrap();
        assert_eq!(command.kind, LinkKind::Magnet);
        wrapper.remove();
    }

    #[wasm_bindgen_test]
    fn test_series_listing_has_no_header_cell() {
        let document = dom::document().unwrap();
        let wrapper = listing(
            &document,
            r#"<table class="table-list">
                 <tbody>
                   <tr><td><a href="/series/show/">Show</a></td></tr>
                 </tbody>
               </table>"#,
        );

        assert_eq!(append_columns(&document, "https://1337x.to/series/a-to-z/1/13/"), 1);
        assert!(wrapper.query_selector("th").unwrap().is_none());
        let dl = wrapper.query_selector(".list-button-dl").unwrap().unwrap();
        assert!(dl.get_attribute(HREF_ATTR).unwrap().ends_with("/series/show/"));
        wrapper.remove();
    }
}
