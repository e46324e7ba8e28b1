use motion_core::{EntityHandle, StyleWrite, Surface};
use web_sys as web;

/// Entity handle -> element, the host side of the scheduler's writes.
#[derive(Default)]
pub struct DomSurface {
    elements: Vec<Option<web::HtmlElement>>,
}

impl DomSurface {
    pub fn insert(&mut self, handle: EntityHandle, element: web::HtmlElement) {
        let i = handle.index();
        if self.elements.len() <= i {
            self.elements.resize(i + 1, None);
        }
        self.elements[i] = Some(element);
    }

    /// Whether `element` is the node bound to `handle`.
    pub fn holds(&self, handle: EntityHandle, element: &web::HtmlElement) -> bool {
        self.element(handle).is_some_and(|el| el == element)
    }

    fn element(&self, handle: EntityHandle) -> Option<&web::HtmlElement> {
        self.elements.get(handle.index()).and_then(Option::as_ref)
    }
}

impl Surface for DomSurface {
    fn is_attached(&self, handle: EntityHandle) -> bool {
        self.element(handle).is_some_and(|el| el.is_connected())
    }

    fn write(&mut self, handle: EntityHandle, write: &StyleWrite) {
        let Some(el) = self.element(handle) else {
            return;
        };
        let style = el.style();
        match write {
            StyleWrite::Transform(value) => {
                _ = style.set_property("transform", value);
            }
            StyleWrite::ClearTransform => {
                _ = style.remove_property("transform");
            }
            StyleWrite::Opacity(value) => {
                _ = style.set_property("opacity", value);
            }
        }
    }
}
