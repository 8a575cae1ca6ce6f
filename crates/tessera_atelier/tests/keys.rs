//! Keyed list reconciliation tests.

mod common;

use common::{html, scratch, Log};
use tessera_canvas::HostTree;
use tessera_relief::{
    children, create_element, props, Child, Component, ComponentType, Context, RenderContext,
    State, VNode,
};

fn li(key: &str, text: &str) -> VNode {
    create_element("li", props! { "key" => key }, children![text])
}

// =============================================================================
// Host Elements
// =============================================================================

mod host_elements {
    use super::*;

    #[test]
    fn keyed_nodes_keep_identity_across_reorders() {
        let (mut r, root) = scratch();

        r.render(
            create_element("div", props! {}, children![li("a", "a"), li("b", "b")]),
            root,
        )
        .unwrap();
        let list = r.host().first_child(root).unwrap().unwrap();
        let [node_a, node_b] = [0, 1].map(|i| r.host().child_at(list, i).unwrap().unwrap());

        r.render(
            create_element("div", props! {}, children![li("b", "b"), li("c", "c")]),
            root,
        )
        .unwrap();

        insta::assert_snapshot!(html(&r, root), @"<div><li>b</li><li>c</li></div>");
        assert_eq!(r.host().first_child(root).unwrap(), Some(list));
        assert_eq!(r.host().child_at(list, 0).unwrap(), Some(node_b));
        assert_ne!(r.host().child_at(list, 1).unwrap(), Some(node_a));
        assert!(!r.host().contains(node_a));
    }

    #[test]
    fn removes_orphaned_keyed_nodes() {
        let (mut r, root) = scratch();

        r.render(
            create_element(
                "div",
                props! {},
                children![
                    create_element("div", props! {}, children!["1"]),
                    li("a", "a"),
                    li("b", "b"),
                ],
            ),
            root,
        )
        .unwrap();

        r.render(
            create_element(
                "div",
                props! {},
                children![
                    create_element("div", props! {}, children!["2"]),
                    li("b", "b"),
                    li("c", "c"),
                ],
            ),
            root,
        )
        .unwrap();

        insta::assert_snapshot!(html(&r, root), @"<div><div>2</div><li>b</li><li>c</li></div>");
    }

    #[test]
    fn reverses_a_keyed_list() {
        let (mut r, root) = scratch();
        let keys = ["a", "b", "c", "d"];

        r.render(
            create_element("ul", props! {}, keys.map(|k| li(k, k)).to_vec()),
            root,
        )
        .unwrap();
        let list = r.host().first_child(root).unwrap().unwrap();
        let before = r.host().children(list).unwrap().to_vec();

        r.render(
            create_element("ul", props! {}, keys.iter().rev().map(|k| li(k, k)).collect::<Vec<_>>()),
            root,
        )
        .unwrap();

        insta::assert_snapshot!(html(&r, root), @"<ul><li>d</li><li>c</li><li>b</li><li>a</li></ul>");
        let after = r.host().children(list).unwrap().to_vec();
        assert_eq!(after, before.into_iter().rev().collect::<Vec<_>>());
    }

    #[test]
    fn duplicate_keys_match_once() {
        let (mut r, root) = scratch();
        let tree = || create_element("ul", props! {}, children![li("a", "1"), li("a", "2")]);

        r.render(tree(), root).unwrap();
        let list = r.host().first_child(root).unwrap().unwrap();
        let [first, second] = [0, 1].map(|i| r.host().child_at(list, i).unwrap().unwrap());

        r.render(tree(), root).unwrap();

        insta::assert_snapshot!(html(&r, root), @"<ul><li>1</li><li>2</li></ul>");
        assert_eq!(r.host().child_at(list, 0).unwrap(), Some(first));
        assert!(!r.host().contains(second));
    }

    #[test]
    fn placeholder_is_never_left_behind() {
        let (mut r, root) = scratch();
        r.render(create_element("ul", props! {}, children![li("a", "a")]), root)
            .unwrap();
        r.host_mut().clear_mutations();

        r.render(
            create_element("ul", props! {}, children![li("z", "z"), li("a", "a"), "tail"]),
            root,
        )
        .unwrap();

        insta::assert_snapshot!(html(&r, root), @"<ul><li>z</li><li>a</li>tail</ul>");
        let placeholders = r
            .host()
            .mutations()
            .iter()
            .filter(|m| matches!(m, tessera_canvas::Mutation::CreateElement { tag, .. } if tag == "span"))
            .count();
        assert_eq!(placeholders, 2);
    }
}

// =============================================================================
// Components
// =============================================================================

mod components {
    use super::*;

    struct Item {
        log: Log,
    }

    impl Component for Item {
        fn initial_state(&self, _props: &tessera_relief::Props) -> State {
            props! { "clicks" => 0 }
        }

        fn component_did_mount(&self, cx: &mut Context<'_>) {
            let label = cx.props().get_str("label").unwrap_or_default().to_string();
            self.log.push(format!("mount {label}"));
        }

        fn component_will_unmount(&self, cx: &mut Context<'_>) {
            let label = cx.props().get_str("label").unwrap_or_default().to_string();
            self.log.push(format!("unmount {label}"));
        }

        fn render(&self, cx: &RenderContext<'_>) -> VNode {
            let label = cx.props().get_str("label").unwrap_or_default();
            let clicks = cx.state().get_int("clicks").unwrap_or(0);
            create_element("li", props! {}, children![format!("{label}:{clicks}")])
        }
    }

    fn item(ty: &ComponentType, key: &str) -> VNode {
        create_element(ty, props! { "key" => key, "label" => key }, children![])
    }

    #[test]
    fn keyed_components_keep_state_across_reorders() {
        let (mut r, root) = scratch();
        let log = Log::default();
        let ty = {
            let log = log.clone();
            ComponentType::new(move |_| Item { log: log.clone() })
        };

        r.render(
            create_element("ul", props! {}, children![item(&ty, "a"), item(&ty, "b")]),
            root,
        )
        .unwrap();
        let list = r.host().first_child(root).unwrap().unwrap();
        let node_a = r.host().child_at(list, 0).unwrap().unwrap();
        let a = r.element_at(node_a).and_then(VNode::owner).unwrap();
        r.set_state(a, props! { "clicks" => 3 }).unwrap();

        r.render(
            create_element(
                "ul",
                props! {},
                children![item(&ty, "c"), item(&ty, "b"), item(&ty, "a")],
            ),
            root,
        )
        .unwrap();

        insta::assert_snapshot!(html(&r, root), @"<ul><li>c:0</li><li>b:0</li><li>a:3</li></ul>");
        assert_eq!(log.entries(), vec!["mount a", "mount b", "mount c"]);
        assert_eq!(r.host().child_at(list, 2).unwrap(), Some(node_a));

        r.render(create_element("ul", props! {}, children![item(&ty, "b")]), root)
            .unwrap();
        assert_eq!(log.count("unmount a"), 1);
        assert_eq!(log.count("unmount c"), 1);
        assert_eq!(r.component_count(), 1);
    }

    #[derive(Default)]
    struct BusyIndicator;

    impl Component for BusyIndicator {
        fn render(&self, cx: &RenderContext<'_>) -> VNode {
            let busy = cx.props().get_bool("busy").unwrap_or(false);
            let content = cx.props().children();
            let body = if content.is_empty() {
                Child::from(create_element(
                    "div",
                    props! { "class" => "busy-placeholder" },
                    children![],
                ))
            } else {
                Child::from(content)
            };
            create_element(
                "div",
                props! { "class" => if busy { "busy" } else { "" } },
                children![
                    body,
                    create_element(
                        "div",
                        props! { "class" => "indicator" },
                        children![
                            create_element("div", props! {}, children!["indicator"]),
                            create_element("div", props! {}, children!["indicator"]),
                            create_element("div", props! {}, children!["indicator"]),
                        ],
                    ),
                ],
            )
        }
    }

    #[derive(Default)]
    struct App;

    impl Component for App {
        fn render(&self, cx: &RenderContext<'_>) -> VNode {
            let opened = cx.props().get_bool("opened").unwrap_or(false);
            let loading = cx.props().get_bool("loading").unwrap_or(false);
            create_element(
                ComponentType::of::<BusyIndicator>(),
                props! { "id" => "app", "busy" => loading },
                children![
                    create_element(
                        "div",
                        props! {},
                        children!["This div needs to be here for this to break"],
                    ),
                    (opened && !loading)
                        .then(|| create_element("div", props! {}, children![Vec::<Child>::new()])),
                ],
            )
        }
    }

    #[test]
    fn removes_keyed_nodes() {
        let (mut r, root) = scratch();
        let app = ComponentType::of::<App>();

        r.render(create_element(app.clone(), props! {}, children![]), root)
            .unwrap();
        r.render(
            create_element(
                app.clone(),
                props! { "opened" => true, "loading" => true },
                children![],
            ),
            root,
        )
        .unwrap();
        r.render(
            create_element(app, props! { "opened" => true }, children![]),
            root,
        )
        .unwrap();

        let busy = r.host().first_child(root).unwrap().unwrap();
        insta::assert_snapshot!(
            html(&r, busy),
            @r#"<div>This div needs to be here for this to break</div><div></div><div class="indicator"><div>indicator</div><div>indicator</div><div>indicator</div></div>"#
        );
    }
}
