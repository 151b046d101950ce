//! Instance registry and event entry points.
//!
//! A [`Stack`] owns the host and every live instance. Drivers forward four
//! kinds of signals to it: anchor clicks, fragment changes, viewport resizes,
//! and timer wake-ups ([`Stack::run_due`]). Resize and fragment handlers fan
//! out to all instances; clicks target one anchor.

use std::rc::Rc;
use std::time::Duration;

use tabstack_config::StackConfig;
use tabstack_host::{Browser, Dom, PointerEvents};

use crate::bar;
use crate::extract::{Extraction, extract};
use crate::instance::{AnchorRef, BarPosition, Instance, InstanceId};
use crate::layout::{self, LayoutMode};
use crate::resize;
use crate::resolve::resolve;
use crate::tasks::{Task, TaskQueue};
use crate::update::update;

/// Delay between a mutation and the measurement that depends on it.
pub const SETTLE_DELAY: Duration = Duration::from_millis(10);

/// All instances created by one initialization, plus their host.
pub struct Stack<H: Dom + Browser> {
    host: H,
    instances: Vec<Instance<H::Node>>,
    tasks: TaskQueue,
}

impl<H: Dom + Browser> Stack<H> {
    /// Build an instance for every container that has a heading.
    ///
    /// Containers without headings are skipped but still count towards the
    /// container ids used in generated page ids. Runs one resize pass right
    /// away and queues the initial selections and the fragment reveal. An
    /// empty container list does nothing at all.
    pub fn initialize(host: H, containers: &[H::Node], config: StackConfig) -> Self {
        let mut stack = Self {
            host,
            instances: Vec::new(),
            tasks: TaskQueue::default(),
        };
        if containers.is_empty() {
            return stack;
        }

        let config = Rc::new(config);
        for (i, container) in containers.iter().enumerate() {
            stack.create(container, i + 1, &config);
        }
        tracing::debug!(
            containers = containers.len(),
            instances = stack.instances.len(),
            "Initialized stack"
        );

        stack.on_resize();
        stack.schedule(Task::RevealFragment);
        stack
    }

    /// Build one instance and queue its initial selection.
    fn create(&mut self, container: &H::Node, container_id: usize, config: &Rc<StackConfig>) {
        let Some(Extraction { headings, pages }) =
            extract(&mut self.host, container, container_id, config)
        else {
            tracing::debug!(container_id, "Container has no heading, skipping");
            return;
        };

        let token = config.bar_token();
        let top = bar::build(&mut self.host, &headings, &token);
        let bottom = bar::build(&mut self.host, &headings, &token);

        self.host.prepend_child(container, top.list());
        for page in &pages {
            self.host.append_child(container, page);
        }
        self.host.append_child(container, bottom.list());

        let mut instance = Instance {
            container: container.clone(),
            config: Rc::clone(config),
            headings,
            pages,
            bars: [top, bottom],
            selection: None,
        };

        let hash = self.host.location_hash();
        let initial = resolve(&self.host, &instance, &hash).or_else(|| {
            match layout::detect(&self.host, &instance) {
                LayoutMode::Accordion => None,
                LayoutMode::TabRow => Some(0),
            }
        });
        tracing::debug!(container_id, ?initial, "Created instance");
        // Recorded now so the startup resize pass doesn't force page 0.
        // Tokens are applied by the deferred select.
        instance.selection = initial;

        let id = InstanceId(self.instances.len());
        self.instances.push(instance);
        self.schedule(Task::Select {
            instance: id,
            selection: initial,
        });
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Live instances, in container order.
    pub fn instances(&self) -> &[Instance<H::Node>] {
        &self.instances
    }

    /// Every anchor of every bar, for attaching click listeners.
    pub fn anchors(&self) -> impl Iterator<Item = (AnchorRef, &H::Node)> + '_ {
        self.instances.iter().enumerate().flat_map(|(i, instance)| {
            [BarPosition::Top, BarPosition::Bottom]
                .into_iter()
                .flat_map(move |bar| {
                    instance
                        .bar(bar)
                        .anchors()
                        .iter()
                        .enumerate()
                        .map(move |(index, node)| {
                            let anchor = AnchorRef {
                                instance: InstanceId(i),
                                bar,
                                index,
                            };
                            (anchor, node)
                        })
                })
        })
    }

    /// Earliest deadline among queued tasks.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.tasks.next_deadline()
    }

    /// Returns true if deferred work is waiting.
    pub fn has_pending(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Handle a click on a bar anchor. The driver suppresses navigation.
    ///
    /// Clicking the current page collapses it: the selection is cleared and
    /// the fragment dropped from the URL. Tab-row layout restores page 0 on
    /// the next resize pass, so only accordions stay collapsed.
    pub fn on_click(&mut self, anchor: AnchorRef) {
        let Some(instance) = self.instances.get_mut(anchor.instance.0) else {
            return;
        };
        let bar = instance.bar(anchor.bar);
        let (Some(item), Some(link)) = (
            bar.items().get(anchor.index),
            bar.anchors().get(anchor.index),
        ) else {
            return;
        };
        if self.host.computed_style(item).pointer_events == PointerEvents::None {
            tracing::debug!(?anchor, "Anchor disabled, ignoring click");
            return;
        }

        let href = self.host.href(link);
        let (selection, url) = if instance.selection == Some(anchor.index) {
            (None, strip_fragment(&href).to_owned())
        } else {
            (Some(anchor.index), href)
        };
        self.host.push_state(&url);
        update(&mut self.host, instance, selection);

        if selection.is_some() {
            self.schedule(Task::ScrollToInstance {
                instance: anchor.instance,
            });
        }
    }

    /// Handle a fragment change.
    ///
    /// Instances the new fragment resolves for switch after the settle delay;
    /// the others keep their selection.
    pub fn on_hash_change(&mut self) {
        let hash = self.host.location_hash();
        let resolved: Vec<_> = self
            .instances
            .iter()
            .enumerate()
            .filter_map(|(i, instance)| {
                resolve(&self.host, instance, &hash).map(|index| (InstanceId(i), index))
            })
            .collect();

        for (instance, index) in resolved {
            self.schedule(Task::Select {
                instance,
                selection: Some(index),
            });
        }
    }

    /// Handle a (coalesced) viewport resize.
    pub fn on_resize(&mut self) {
        for instance in &mut self.instances {
            resize::react(&mut self.host, instance);
        }
    }

    /// Run every queued task whose deadline has passed.
    pub fn run_due(&mut self) {
        let now = self.host.now();
        for task in self.tasks.drain_ready(now) {
            tracing::debug!(?task, "Running deferred task");
            self.run(task);
        }
    }

    fn run(&mut self, task: Task) {
        match task {
            Task::Select {
                instance,
                selection,
            } => {
                if let Some(instance) = self.instances.get_mut(instance.0) {
                    update(&mut self.host, instance, selection);
                }
            }
            Task::ScrollToInstance { instance } => self.scroll_to_instance(instance),
            Task::RevealFragment => self.reveal_fragment(),
        }
    }

    /// Bring the container into view unless the top bar is fully visible.
    ///
    /// With the top bar off screen, tab-row layout still stays put while the
    /// bottom bar is fully visible; accordions always scroll.
    fn scroll_to_instance(&mut self, id: InstanceId) {
        let Some(instance) = self.instances.get(id.0) else {
            return;
        };
        let viewport = self.host.viewport_height();
        let [top, bottom] = &instance.bars;
        if self.host.bounding_rect(top.list()).is_within_viewport(viewport) {
            return;
        }
        let bottom_visible = self.host.bounding_rect(bottom.list()).is_within_viewport(viewport);
        if layout::detect(&self.host, instance).is_accordion() || !bottom_visible {
            self.host.scroll_into_view(&instance.container);
        }
    }

    /// Scroll the element named by the current fragment into view, if any.
    fn reveal_fragment(&mut self) {
        let id = self.host.location_hash().replacen('#', "", 1);
        if id.is_empty() {
            return;
        }
        if let Some(target) = self.host.element_by_id(&id) {
            self.host.scroll_into_view(&target);
        }
    }

    /// Queue `task` after the settle delay and ask the host for a wake-up.
    fn schedule(&mut self, task: Task) {
        let now = self.host.now();
        self.tasks.schedule(now, SETTLE_DELAY, task);
        self.host.request_wake(SETTLE_DELAY);
    }

    #[cfg(test)]
    pub(crate) fn apply(&mut self, instance: usize, selection: crate::Selection) {
        update(&mut self.host, &mut self.instances[instance], selection);
    }
}

/// `href` without its fragment.
fn strip_fragment(href: &str) -> &str {
    href.find('#').map_or(href, |i| &href[..i])
}
