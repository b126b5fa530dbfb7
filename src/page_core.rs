use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{Dispatch, DrawerView, Page, PageAction, ProjectId};

use crate::dom_surface::{DomSurface, ProjectElements};

pub(crate) type PageSubscriber = Rc<dyn Fn()>;

/// Shared handle the listeners and the drawer component talk to.
pub(crate) struct PageCore {
    page: RefCell<Page>,
    surface: RefCell<DomSurface>,
    drawer: RefCell<Option<DrawerView>>,
    subscribers: Rc<RefCell<Vec<PageSubscriber>>>,
}

impl PageCore {
    pub(crate) fn new(page: Page, surface: DomSurface) -> Rc<Self> {
        let drawer = page.drawer().view();
        Rc::new(Self {
            page: RefCell::new(page),
            surface: RefCell::new(surface),
            drawer: RefCell::new(drawer),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        })
    }

    pub(crate) fn subscribe(&self, subscriber: PageSubscriber) -> PageSubscription {
        self.subscribers.borrow_mut().push(subscriber.clone());
        PageSubscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    /// Runs one action against the page and the live DOM. Subscribers are
    /// told after every borrow is released so they may read back freely.
    pub(crate) fn dispatch(&self, action: PageAction) -> Dispatch {
        let out = {
            let mut page = self.page.borrow_mut();
            let mut surface = self.surface.borrow_mut();
            page.dispatch(action, &mut *surface)
        };
        if out.drawer_changed {
            self.notify();
        }
        out
    }

    /// Shows every card on its first item.
    pub(crate) fn present_all(&self) {
        let page = self.page.borrow();
        let mut surface = self.surface.borrow_mut();
        page.gallery().present_all(&mut *surface);
    }

    pub(crate) fn drawer_view(&self) -> Option<DrawerView> {
        self.drawer.borrow().clone()
    }

    pub(crate) fn project_elements(&self) -> Vec<(ProjectId, ProjectElements)> {
        let page = self.page.borrow();
        let surface = self.surface.borrow();
        surface
            .projects()
            .filter(|(id, _)| page.gallery().registry().contains(*id))
            .map(|(id, elements)| (id, elements.clone()))
            .collect()
    }

    fn notify(&self) {
        *self.drawer.borrow_mut() = self.page.borrow().drawer().view();
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            (subscriber)();
        }
    }
}

pub(crate) struct PageSubscription {
    subscriber: PageSubscriber,
    subscribers: Rc<RefCell<Vec<PageSubscriber>>>,
}

impl Drop for PageSubscription {
    fn drop(&mut self) {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|item| !Rc::ptr_eq(item, &self.subscriber));
    }
}
