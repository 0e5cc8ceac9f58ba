//! The two button rendering modes: a generated list appended to the host,
//! or decoration of anchors the host markup already declares.

use crate::constants::{BUTTON_CLASS, SERVICE_ATTR};
use crate::dom::Element;
use crate::models::{Options, Service};

/// Generated mode: build the themed button list and append it to the host
/// element, one item per active service in configured order.
pub fn append_button_list(element: &mut Element, services: &[Service], options: &Options) {
    let mut list = Element::new("ul");
    list.add_class(&format!("theme-{}", options.theme.as_str()));
    list.add_class(&format!("orientation-{}", options.orientation.as_str()));

    for service in services {
        let mut item = Element::new("li");
        item.add_class(BUTTON_CLASS);
        item.add_class(service.name());

        let mut link = Element::new("a");
        link.set_attr("href", &service.share_url);
        link.set_attr(SERVICE_ATTR, service.name());

        if let Some(fa_name) = service.fa_name {
            let mut icon = Element::new("span");
            icon.add_class("fa");
            icon.add_class(fa_name);
            link.append_element(icon);
        }

        let mut label = Element::new("span");
        label.add_class("share_text");
        if let Some(text) = service.share_text.get(&options.lang) {
            label.append_text(text);
        }
        link.append_element(label);

        if service.popup {
            link.set_attr("rel", "popup");
        } else {
            link.set_attr("target", "_blank");
        }
        if let Some(title) = service.title.get(&options.lang) {
            link.set_attr("title", title);
        }

        item.append_element(link);
        list.append_element(item);
    }

    element.append_element(list);

    log::debug!("[Render] Appended button list with {} services", services.len());
}

/// Custom mode: no markup is created. Anchors the host declared with a
/// service attribute are wired in place; anchors without a matching active
/// service stay untouched, services without an anchor are skipped.
pub fn wire_custom_buttons(element: &mut Element, services: &[Service], options: &Options) {
    for service in services {
        let Some(anchor) = element.find_mut(&|el| {
            el.tag() == "a" && el.attr(SERVICE_ATTR) == Some(service.name())
        }) else {
            log::debug!("[Render] No custom anchor for service {:?}", service.name());
            continue;
        };

        anchor.set_attr("href", &service.share_url);
        if service.popup {
            anchor.set_attr("rel", "popup");
        } else {
            anchor.set_attr("target", "_blank");
        }
        if let Some(title) = service.title.get(&options.lang) {
            anchor.set_attr("title", title);
        }
    }
}
