// src/core/table.rs

use crate::models::{Arity, Placement, Token, TokenGroup};

/// The base command. Shells are expected to provide `k` itself.
static BASE: &[Token] = &[Token::new("k", "k")];

static OPERATIONS: &[Token] = &[
    Token::new("g", "get"),
    Token::new("t", "tree"),
    Token::new("e", "edit"),
    Token::new("d", "describe"),
    Token::new("a", "apply -f"),
    Token::new("x", "exec -i -t"),
    Token::new("lo", "logs -f"),
    Token::new("rm", "delete"),
    Token::new("rr", "rollout restart"),
    Token::new(
        "run",
        "run --rm --restart=Never --image-pull-policy=IfNotPresent -i -t",
    ),
];

static RESOURCES: &[Token] = &[
    Token::new("po", "pods").requires(&["g", "d", "e", "rm"]),
    Token::new("dep", "deployment").requires(&["g", "t", "d", "e", "rm", "rr"]),
    Token::new("sts", "statefulset").requires(&["g", "t", "d", "e", "rm", "rr"]),
    Token::new("svc", "service").requires(&["g", "d", "e", "rm"]),
    Token::new("ing", "ingress").requires(&["g", "d", "e", "rm"]),
    Token::new("cm", "configmap").requires(&["g", "d", "e", "rm"]),
    Token::new("sec", "secret").requires(&["g", "d", "e", "rm"]),
    Token::new("no", "nodes").requires(&["g", "d", "e"]),
    Token::new("ns", "namespaces").requires(&["g", "d", "e", "rm"]),
];

static FLAGS: &[Token] = &[
    Token::new("owide", "-o=wide")
        .requires(&["g"])
        .excludes(&["oyaml", "ojson"]),
    Token::new("oyaml", "-o=yaml")
        .requires(&["g"])
        .excludes(&["owide", "ojson", "sl"]),
    Token::new("ojson", "-o=json")
        .requires(&["g"])
        .excludes(&["owide", "oyaml", "sl"]),
    Token::new("all", "--all-namespaces")
        .requires(&["g", "d"])
        .excludes(&["rm", "no", "ns"]),
    Token::new("sl", "--show-labels")
        .requires(&["g"])
        .excludes(&["oyaml", "ojson"]),
    Token::new("w", "--watch")
        .requires(&["g"])
        .excludes(&["oyaml", "ojson", "owide"]),
];

// These take a value, so they go last and only one of them per alias.
static POSITIONAL_FLAGS: &[Token] = &[
    Token::new("l", "-l").requires(&["g", "d", "l", "rm", "rr"]),
    Token::new("n", "--namespace")
        .requires(&["g", "t", "d", "e", "x", "l", "rm"])
        .excludes(&["ns", "no", "all"]),
];

/// The kubectl alias grammar, in the order tokens appear in an alias.
pub static KUBECTL: &[TokenGroup] = &[
    TokenGroup {
        name: "base",
        tokens: BASE,
        optional: false,
        arity: Arity::ExactlyOne,
        placement: Placement::Positional,
    },
    TokenGroup {
        name: "operations",
        tokens: OPERATIONS,
        optional: true,
        arity: Arity::ExactlyOne,
        placement: Placement::Free,
    },
    TokenGroup {
        name: "resources",
        tokens: RESOURCES,
        optional: true,
        arity: Arity::ExactlyOne,
        placement: Placement::Free,
    },
    TokenGroup {
        name: "flags",
        tokens: FLAGS,
        optional: true,
        arity: Arity::AnySubset,
        placement: Placement::Free,
    },
    TokenGroup {
        name: "positional flags",
        tokens: POSITIONAL_FLAGS,
        optional: true,
        arity: Arity::ExactlyOne,
        placement: Placement::Positional,
    },
];
