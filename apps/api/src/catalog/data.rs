//! The coding-question catalog. Read-only reference data; entries are selected, never built.

use crate::models::coding::Difficulty;

pub const MAX_PRODUCT_ID: &str = "1";
pub const RATE_LIMITER_ID: &str = "2";
pub const LRU_CACHE_ID: &str = "3";
pub const DEBOUNCE_ID: &str = "4";
pub const FIND_PAIRS_ID: &str = "5";
pub const BST_ID: &str = "6";

#[derive(Debug)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub question: &'static str,
    pub difficulty: Difficulty,
    pub category: &'static str,
    pub tags: &'static [&'static str],
    pub solution: &'static str,
    pub code_example: Option<&'static str>,
    pub time_complexity: Option<&'static str>,
    pub space_complexity: Option<&'static str>,
    pub explanation: Option<&'static str>,
    pub hints: &'static [&'static str],
}

pub const CODING_QUESTIONS: &[CatalogEntry] = &[
    CatalogEntry {
        id: MAX_PRODUCT_ID,
        question: "Find the maximum product of two integers in an array",
        difficulty: Difficulty::Easy,
        category: "Arrays",
        tags: &["arrays", "math", "optimization"],
        solution: r#"fn max_product(values: &[i64]) -> Option<i64> {
    if values.len() < 2 {
        return None;
    }
    let (mut max1, mut max2) = (i64::MIN, i64::MIN);
    let (mut min1, mut min2) = (i64::MAX, i64::MAX);
    for &v in values {
        if v > max1 {
            max2 = max1;
            max1 = v;
        } else if v > max2 {
            max2 = v;
        }
        if v < min1 {
            min2 = min1;
            min1 = v;
        } else if v < min2 {
            min2 = v;
        }
    }
    Some((max1 * max2).max(min1 * min2))
}"#,
        code_example: Some("max_product(&[1, 5, 3, 2, 9, 7, 6]); // Some(63), 9 * 7"),
        time_complexity: Some("O(n)"),
        space_complexity: Some("O(1)"),
        explanation: Some(
            "Track the two largest and the two smallest values in one pass; two large negatives can beat the two largest positives.",
        ),
        hints: &[
            "Negative numbers matter",
            "Keep both the largest and the smallest values",
        ],
    },
    CatalogEntry {
        id: RATE_LIMITER_ID,
        question: "Implement a rate limiter class",
        difficulty: Difficulty::Medium,
        category: "System Design",
        tags: &["rate-limiting", "data-structures", "system-design"],
        solution: r#"use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

pub struct RateLimiter {
    max_requests: usize,
    window: Duration,
    requests: HashMap<String, VecDeque<Instant>>,
}

impl RateLimiter {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self { max_requests, window, requests: HashMap::new() }
    }

    pub fn is_allowed(&mut self, user_id: &str, now: Instant) -> bool {
        let times = self.requests.entry(user_id.to_string()).or_default();
        while times.front().is_some_and(|t| now.duration_since(*t) >= self.window) {
            times.pop_front();
        }
        if times.len() >= self.max_requests {
            return false;
        }
        times.push_back(now);
        true
    }

    /// Drops users whose whole history has expired.
    pub fn cleanup(&mut self, now: Instant) {
        let window = self.window;
        self.requests.retain(|_, times| {
            times.retain(|t| now.duration_since(*t) < window);
            !times.is_empty()
        });
    }
}"#,
        code_example: Some("let mut limiter = RateLimiter::new(5, Duration::from_secs(60)); // 5 requests per minute"),
        time_complexity: Some("O(n) where n is the number of requests in the window"),
        space_complexity: Some("O(u*r) where u is users and r is requests per window"),
        explanation: Some(
            "A sliding window log per user: expired timestamps fall off the front, new ones go on the back.",
        ),
        hints: &[
            "Store a timestamp per request",
            "Evict expired timestamps before counting",
            "Think about memory for many users",
        ],
    },
    CatalogEntry {
        id: LRU_CACHE_ID,
        question: "Design and implement a LRU (Least Recently Used) cache",
        difficulty: Difficulty::Hard,
        category: "Data Structures",
        tags: &["cache", "linked-list", "hash-map", "design"],
        solution: r#"use std::collections::HashMap;

struct Node {
    key: i32,
    value: i32,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Hash map from key to slot, plus an index-linked list ordered by recency.
pub struct LruCache {
    capacity: usize,
    map: HashMap<i32, usize>,
    nodes: Vec<Node>,
    head: Option<usize>, // most recent
    tail: Option<usize>, // least recent
}

impl LruCache {
    pub fn new(capacity: usize) -> Self {
        Self { capacity, map: HashMap::new(), nodes: Vec::new(), head: None, tail: None }
    }

    pub fn get(&mut self, key: i32) -> Option<i32> {
        let idx = *self.map.get(&key)?;
        self.detach(idx);
        self.push_front(idx);
        Some(self.nodes[idx].value)
    }

    pub fn put(&mut self, key: i32, value: i32) {
        if let Some(&idx) = self.map.get(&key) {
            self.nodes[idx].value = value;
            self.detach(idx);
            self.push_front(idx);
            return;
        }
        let idx = if self.map.len() == self.capacity {
            let lru = self.tail.expect("full cache has a tail");
            self.detach(lru);
            self.map.remove(&self.nodes[lru].key);
            self.nodes[lru] = Node { key, value, prev: None, next: None };
            lru
        } else {
            self.nodes.push(Node { key, value, prev: None, next: None });
            self.nodes.len() - 1
        };
        self.map.insert(key, idx);
        self.push_front(idx);
    }

    fn detach(&mut self, idx: usize) {
        let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);
        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => self.tail = prev,
        }
    }

    fn push_front(&mut self, idx: usize) {
        self.nodes[idx].prev = None;
        self.nodes[idx].next = self.head;
        if let Some(h) = self.head {
            self.nodes[h].prev = Some(idx);
        }
        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
    }
}"#,
        code_example: Some("let mut cache = LruCache::new(2); cache.put(1, 1); cache.put(2, 2); cache.get(1); // Some(1)"),
        time_complexity: Some("O(1) for both get and put operations"),
        space_complexity: Some("O(capacity)"),
        explanation: Some(
            "The map gives O(1) lookup; the linked list gives O(1) reordering and eviction of the least recently used entry.",
        ),
        hints: &[
            "Pair a hash map with a doubly linked list",
            "Indices into a Vec avoid shared ownership",
            "Consider locking for concurrent use",
        ],
    },
    CatalogEntry {
        id: DEBOUNCE_ID,
        question: "Implement debounce function",
        difficulty: Difficulty::Easy,
        category: "Functions",
        tags: &["functions", "closures", "timing"],
        solution: r#"use std::time::Duration;
use tokio::sync::mpsc;

/// Forwards a value only after `delay` has passed without a newer one arriving.
pub fn debounce<T: Send + 'static>(
    delay: Duration,
    mut on_settle: impl FnMut(T) + Send + 'static,
) -> mpsc::UnboundedSender<T> {
    let (tx, mut rx) = mpsc::unbounded_channel::<T>();
    tokio::spawn(async move {
        while let Some(mut latest) = rx.recv().await {
            loop {
                match tokio::time::timeout(delay, rx.recv()).await {
                    Ok(Some(newer)) => latest = newer,
                    Ok(None) => return on_settle(latest),
                    Err(_) => break,
                }
            }
            on_settle(latest);
        }
    });
    tx
}"#,
        code_example: Some("let search = debounce(Duration::from_millis(300), |q: String| run_search(q));"),
        time_complexity: Some("O(1)"),
        space_complexity: Some("O(1)"),
        explanation: Some(
            "Every new call restarts the timer; only the last value of a burst reaches the callback.",
        ),
        hints: &[
            "Restart the timer on every call",
            "Keep only the latest arguments",
            "Flush the pending value on shutdown",
        ],
    },
    CatalogEntry {
        id: FIND_PAIRS_ID,
        question: "Find all pairs in array that sum to target",
        difficulty: Difficulty::Easy,
        category: "Arrays",
        tags: &["arrays", "hash-map", "two-pointer"],
        solution: r#"use std::collections::HashSet;

fn find_pairs(values: &[i64], target: i64) -> Vec<(i64, i64)> {
    let mut seen = HashSet::new();
    let mut pairs = Vec::new();
    for &v in values {
        let complement = target - v;
        if seen.contains(&complement) {
            pairs.push((complement, v));
        }
        seen.insert(v);
    }
    pairs
}"#,
        code_example: Some("find_pairs(&[1, 2, 3, 4, 5], 5); // [(2, 3), (1, 4)]"),
        time_complexity: Some("O(n)"),
        space_complexity: Some("O(n)"),
        explanation: Some(
            "A hash set of values seen so far answers \"has the complement appeared?\" in constant time.",
        ),
        hints: &[
            "Use a hash set for O(1) lookups",
            "Compute the complement of each value",
        ],
    },
    CatalogEntry {
        id: BST_ID,
        question: "Implement a binary search tree with insert and search",
        difficulty: Difficulty::Medium,
        category: "Trees",
        tags: &["trees", "bst", "recursion"],
        solution: r#"#[derive(Default)]
pub struct Bst {
    root: Option<Box<Node>>,
}

struct Node {
    value: i32,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Bst {
    pub fn insert(&mut self, value: i32) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if value < node.value { &mut node.left } else { &mut node.right };
        }
        *slot = Some(Box::new(Node { value, left: None, right: None }));
    }

    pub fn contains(&self, value: i32) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if value == node.value {
                return true;
            }
            current = if value < node.value { node.left.as_deref() } else { node.right.as_deref() };
        }
        false
    }
}"#,
        code_example: Some("let mut bst = Bst::default(); bst.insert(5); bst.insert(3); bst.contains(3); // true"),
        time_complexity: Some("O(log n) average, O(n) worst case"),
        space_complexity: Some("O(n)"),
        explanation: Some(
            "Smaller values go left and larger or equal values go right, so a search discards one subtree per step.",
        ),
        hints: &[
            "Compare to choose left or right",
            "Handle the empty tree",
            "Try both iterative and recursive versions",
        ],
    },
];
