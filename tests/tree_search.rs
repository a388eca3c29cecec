use plugkit::tree::{find_in_react_tree, find_in_tree, has_props, is_object, Depth, Filter, SearchOptions};
use serde_json::{json, Value};

/// A module cache as a host exposes it: numeric ids to export objects.
fn module_cache() -> Value {
    json!({
        "1024": { "exports": { "default": { "useState": {}, "createElement": {} } } },
        "2048": {
            "exports": {
                "Z": { "getCurrentUser": {}, "getUser": {} },
                "ZP": { "dispatch": {}, "subscribe": {} }
            }
        },
        "4096": { "exports": null }
    })
}

#[test]
fn finds_module_by_props() {
    let cache = module_cache();
    let filter = Filter::predicate(|m| has_props(m, ["getCurrentUser", "getUser"]));

    let found = find_in_tree(&cache, &filter, &SearchOptions::default());
    assert_eq!(found, Some(&json!({ "getCurrentUser": {}, "getUser": {} })));
}

#[test]
fn ignored_branch_is_never_searched() {
    let cache = module_cache();
    let filter = Filter::predicate(|m| has_props(m, ["dispatch"]));

    let options = SearchOptions::default().ignore(["2048"]);
    assert_eq!(find_in_tree(&cache, &filter, &options), None);
}

#[test]
fn key_filter_returns_first_owner_in_pre_order() {
    let cache = module_cache();
    let found = find_in_tree(&cache, &Filter::key("exports"), &SearchOptions::default());
    assert_eq!(
        found,
        Some(&json!({ "default": { "useState": {}, "createElement": {} } }))
    );
}

#[test]
fn depth_budget_is_respected_for_every_n() {
    // Chain of mappings: level i owns "next", the innermost owns "leaf".
    let mut tree = json!({ "leaf": "bottom" });
    for _ in 0..5 {
        tree = json!({ "next": tree });
    }

    // "leaf" is owned by the mapping at depth 5, so 6 levels are needed.
    for n in 0..=5_usize {
        let options = SearchOptions::default().max_recursions(n);
        assert_eq!(find_in_tree(&tree, &Filter::key("leaf"), &options), None, "n = {n}");
    }
    let options = SearchOptions::default().max_recursions(6_usize);
    assert_eq!(
        find_in_tree(&tree, &Filter::key("leaf"), &options),
        Some(&json!("bottom"))
    );
}

#[test]
fn walkable_keys_exclude_even_matching_branches() {
    let tree = json!({
        "stateNode": { "target": "unreachable" },
        "child": { "memoizedState": { "target": "also unreachable" } }
    });
    let options = SearchOptions::default().walkable(["child"]);
    assert_eq!(find_in_tree(&tree, &Filter::key("target"), &options), None);
}

#[test]
fn react_element_search_by_predicate() {
    let element = json!({
        "type": "div",
        "props": {
            "className": "container",
            "children": [
                null,
                "plain text",
                {
                    "type": "button",
                    "props": { "className": "button-primary", "children": "Send" }
                }
            ]
        }
    });

    let button = find_in_react_tree(
        &element,
        &Filter::predicate(|n| {
            is_object(n) && n.get("className").and_then(Value::as_str) == Some("button-primary")
        }),
        Depth::Unbounded,
    );
    assert_eq!(
        button,
        Some(&json!({ "className": "button-primary", "children": "Send" }))
    );
}

#[test]
fn react_search_with_zero_budget_finds_nothing() {
    let element = json!({ "props": {} });
    assert_eq!(
        find_in_react_tree(&element, &Filter::predicate(|_| true), 0_usize),
        None
    );
}
