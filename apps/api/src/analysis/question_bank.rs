//! Static interview question banks. Versioned as data; selection logic lives in `questions`.

use crate::models::analysis::{QuestionWithAnswer, RoleType};

#[derive(Debug)]
pub struct BankEntry {
    pub question: &'static str,
    pub answer: &'static str,
    pub tips: &'static [&'static str],
}

impl BankEntry {
    pub fn to_question(&self) -> QuestionWithAnswer {
        QuestionWithAnswer {
            question: self.question.to_string(),
            answer: self.answer.to_string(),
            tips: self.tips.iter().map(|t| t.to_string()).collect(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Behavioral
// ────────────────────────────────────────────────────────────────────────────

pub const BASE_BEHAVIORAL: &[BankEntry] = &[
    BankEntry {
        question: "Tell me about a challenging project you worked on and how you overcame obstacles.",
        answer: "Structure the story as Situation, Task, Action, Result. Set the project context, state what you owned, walk through the concrete steps you took when things went wrong, and close with the outcome and what you would repeat or change.",
        tips: &[
            "Name the specific obstacles",
            "Show how you reasoned about the problem",
            "End with a measurable outcome",
        ],
    },
    BankEntry {
        question: "Describe a time when you had to learn a new technology quickly. How did you approach it?",
        answer: "Describe how you ramped up: official documentation, a throwaway prototype, reading existing code, asking people who already knew it. Then show how you applied it to a real problem and how long it took to become productive.",
        tips: &[
            "Make your learning method explicit",
            "Mention the resources you relied on",
            "Connect the learning to a delivered result",
        ],
    },
    BankEntry {
        question: "How do you handle conflicting priorities and tight deadlines?",
        answer: "Explain how you rank work by impact and effort, how you split large tasks, and how you keep stakeholders informed. Include an example where you renegotiated scope or a deadline instead of silently slipping.",
        tips: &[
            "Show a repeatable prioritization method",
            "Mention the tools you use to track work",
            "Emphasize early communication",
        ],
    },
    BankEntry {
        question: "Tell me about a time you had to work with a difficult team member. How did you handle it?",
        answer: "Focus on understanding their point of view, keeping the conversation about the work, and finding an arrangement both of you could commit to. Describe how the team stayed productive while it was resolved.",
        tips: &[
            "Do not speak badly of the other person",
            "Show active listening",
            "Explain how the relationship ended up",
        ],
    },
    BankEntry {
        question: "Describe a situation where you had to make a technical decision with incomplete information.",
        answer: "Walk through what you knew, what you could not find out in time, who you consulted, and which risks you accepted. Explain how you kept the decision reversible where possible and how you checked it afterwards.",
        tips: &[
            "Show structured reasoning under uncertainty",
            "Describe how you limited the downside",
            "Say how you validated the call later",
        ],
    },
];

const FRONTEND_BEHAVIORAL: &[BankEntry] = &[
    BankEntry {
        question: "Describe a time when you had to optimize a web application's performance.",
        answer: "Start from the symptom users saw, explain how you profiled it (Lighthouse, browser devtools), which changes you made such as code splitting, lazy loading or image compression, and the before/after numbers.",
        tips: &[
            "Quote metrics before and after",
            "Name the profiling tools",
            "Tie the work to user impact",
        ],
    },
    BankEntry {
        question: "How do you balance user experience with development timelines?",
        answer: "Talk about separating must-have from nice-to-have, shipping a minimal version first, iterating on feedback, and arguing for the user when a shortcut would hurt them.",
        tips: &[
            "Acknowledge business constraints",
            "Mention user feedback loops",
            "Show pragmatic trade-offs",
        ],
    },
];

const BACKEND_BEHAVIORAL: &[BankEntry] = &[
    BankEntry {
        question: "Tell me about a time you designed and implemented a scalable API.",
        answer: "Cover the requirements, the interface style you chose, how you planned for load with caching, rate limiting and horizontal scaling, and how you load-tested the result.",
        tips: &[
            "Name the scalability patterns you used",
            "Share benchmark numbers",
            "Explain the trade-offs you rejected",
        ],
    },
    BankEntry {
        question: "Describe how you handled a critical production bug.",
        answer: "Walk through detection, immediate mitigation, root cause analysis, the permanent fix and the follow-up work that stopped it recurring. Mention how you kept stakeholders updated.",
        tips: &[
            "Show a calm debugging process",
            "Mention monitoring and alerting",
            "Describe the prevention you added",
        ],
    },
];

const FULLSTACK_BEHAVIORAL: &[BankEntry] = &[
    BankEntry {
        question: "How do you decide between implementing logic on the frontend vs backend?",
        answer: "Weigh security (anything sensitive stays on the server), latency and user feedback, server load, and where the logic is easiest to test and change. Give a concrete decision you made and why.",
        tips: &[
            "Lead with security",
            "Discuss performance on both sides",
            "Show separation of concerns",
        ],
    },
    BankEntry {
        question: "Describe a project where you owned both frontend and backend development.",
        answer: "Describe the scope, how you designed the contract between client and server, how you kept both sides consistent, and how you managed the context switching until delivery.",
        tips: &[
            "Show range across the stack",
            "Explain how the API contract stayed in sync",
            "Mention planning and prioritization",
        ],
    },
];

/// Role-specific behavioral questions; roles without a bank get none.
pub fn behavioral_for(role: RoleType) -> &'static [BankEntry] {
    match role {
        RoleType::Frontend => FRONTEND_BEHAVIORAL,
        RoleType::Backend => BACKEND_BEHAVIORAL,
        RoleType::Fullstack => FULLSTACK_BEHAVIORAL,
        _ => &[],
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Technical
// ────────────────────────────────────────────────────────────────────────────

pub const BASE_TECHNICAL: &[BankEntry] = &[
    BankEntry {
        question: "Explain the concept of version control and branching strategies.",
        answer: "Version control records every change so it can be reviewed, reverted and attributed. Common branching models are Git Flow, GitHub Flow and trunk-based development with short-lived branches. Good practice: small focused commits, reviews through pull requests, a protected main branch.",
        tips: &[
            "Compare at least two branching models",
            "Discuss merge versus rebase",
            "Mention code review",
        ],
    },
    BankEntry {
        question: "What are some common security vulnerabilities in web applications and how do you prevent them?",
        answer: "The OWASP Top 10 covers injection, cross-site scripting, CSRF, broken authentication and access control, and sensitive data exposure. Defenses include parameterized queries, output encoding, CSRF tokens, HTTPS, security headers, least privilege and keeping dependencies patched.",
        tips: &[
            "Reference the OWASP Top 10",
            "Pair each vulnerability with a defense",
            "Mention security testing",
        ],
    },
    BankEntry {
        question: "How do you ensure code quality in your projects?",
        answer: "Combine code review, linters and formatters, static analysis, automated tests in CI, and a shared definition of done. Refactor continuously and track quality metrics rather than relying on heroics before a release.",
        tips: &[
            "Name concrete tools",
            "Balance automated and human checks",
            "Show a habit of continuous improvement",
        ],
    },
];

const FRONTEND_TECHNICAL: &[BankEntry] = &[
    BankEntry {
        question: "Explain the virtual DOM and how React uses it for performance optimization.",
        answer: "React keeps an in-memory tree of the UI. On a state change it renders a new tree, diffs it against the previous one (reconciliation) and applies only the minimal set of DOM mutations, batching updates where it can.",
        tips: &[
            "Mention reconciliation",
            "Explain batching",
            "Compare with direct DOM manipulation",
        ],
    },
    BankEntry {
        question: "What are the differences between CSS Grid and Flexbox? When would you use each?",
        answer: "Flexbox lays items out along one axis and suits components such as toolbars and lists. Grid controls rows and columns together and suits page-level layout. They combine well: Grid for the page, Flexbox inside cells.",
        tips: &[
            "One dimension versus two",
            "Give a use case for each",
            "Explain combining them",
        ],
    },
    BankEntry {
        question: "How do you optimize web application performance and reduce bundle size?",
        answer: "Split code with dynamic imports, lazy-load routes and components, tree-shake unused code, compress and resize images, cache aggressively behind a CDN, and watch Core Web Vitals with a performance budget.",
        tips: &[
            "Name the tools you measure with",
            "Mention LCP, INP and CLS",
            "Stress measuring before optimizing",
        ],
    },
    BankEntry {
        question: "Explain the concept of Web Accessibility (a11y) and its importance.",
        answer: "Accessibility makes a site usable by people with disabilities: semantic HTML, keyboard navigation, ARIA where semantics are missing, sufficient contrast, and text alternatives. It is an inclusion issue, a legal requirement under WCAG-based rules, and improves usability for everyone.",
        tips: &[
            "Reference WCAG",
            "Mention axe or Lighthouse audits",
            "Give both ethical and business reasons",
        ],
    },
    BankEntry {
        question: "What are Progressive Web Apps (PWAs) and their key features?",
        answer: "PWAs are web apps that behave like installed apps: a service worker for offline support and caching, a manifest for installation, push notifications, and HTTPS. They reach users without an app store.",
        tips: &[
            "Explain service workers",
            "Mention the web app manifest",
            "Compare with native apps",
        ],
    },
];

const BACKEND_TECHNICAL: &[BankEntry] = &[
    BankEntry {
        question: "Explain the difference between SQL and NoSQL databases and when to use each.",
        answer: "Relational databases enforce schemas and ACID transactions and shine with joins and integrity constraints. NoSQL stores trade some of that for flexible schemas and easier horizontal scaling. Pick by access pattern, consistency needs and scale.",
        tips: &[
            "Contrast ACID and BASE",
            "Give a use case for each",
            "Discuss scaling",
        ],
    },
    BankEntry {
        question: "What are the key principles of RESTful API design?",
        answer: "Resources identified by URLs, standard HTTP methods, stateless requests, cacheable responses and meaningful status codes. In practice add versioning, pagination, consistent naming and good documentation.",
        tips: &[
            "Cover methods and status codes",
            "Discuss resource naming",
            "Stress consistency",
        ],
    },
    BankEntry {
        question: "How do you handle authentication and authorization in your applications?",
        answer: "Authentication establishes identity through sessions, tokens or OAuth; authorization decides what that identity may do through roles or attributes. Hash passwords properly, expire and rotate tokens, and defend against XSS and CSRF.",
        tips: &[
            "Separate authentication from authorization",
            "Mention token lifetimes",
            "Name common attacks",
        ],
    },
    BankEntry {
        question: "Explain database indexing and its impact on performance.",
        answer: "An index, usually a B-tree, lets the database find rows without scanning the table. Reads and filters get faster while writes get slower because the index must be maintained. Index selective, frequently filtered and join columns, and confirm with EXPLAIN.",
        tips: &[
            "Explain the write cost",
            "Mention index types",
            "Use query plans",
        ],
    },
    BankEntry {
        question: "What are microservices and what are their advantages and disadvantages?",
        answer: "Microservices split a system into independently deployable services. They allow independent scaling, deployment and technology choices, at the cost of network latency, distributed data, harder debugging and heavier operations.",
        tips: &[
            "Compare with a monolith",
            "Mention communication patterns",
            "Say when not to use them",
        ],
    },
];

const FULLSTACK_TECHNICAL: &[BankEntry] = &[
    BankEntry {
        question: "How do you ensure data consistency between frontend and backend?",
        answer: "Share a typed API contract, validate on both sides, use optimistic updates with rollback where latency matters, and push server changes over WebSockets when clients must stay in sync.",
        tips: &[
            "Mention shared types or schemas",
            "Discuss optimistic updates",
            "Stress validation on both sides",
        ],
    },
    BankEntry {
        question: "Explain the concept of server-side rendering vs client-side rendering.",
        answer: "Client-side rendering builds the page in the browser and suits highly interactive apps but delays first paint. Server-side rendering sends HTML and improves first paint and SEO. Static generation and hybrid frameworks mix the two per page.",
        tips: &[
            "Discuss first paint and interactivity",
            "Mention SEO",
            "Explain hybrid approaches",
        ],
    },
    BankEntry {
        question: "What strategies do you use for API versioning?",
        answer: "Version in the URL path, in a header or in a query parameter. Keep backward compatibility where possible, deprecate with clear timelines, and document every change for consumers.",
        tips: &[
            "Compare the approaches",
            "Describe a deprecation process",
            "Mention documentation",
        ],
    },
    BankEntry {
        question: "How do you handle state management in large applications?",
        answer: "Keep server state in a caching query layer and UI state local where possible; reach for a central store only for truly global state. Normalize data, use selectors, and avoid threading props through many layers.",
        tips: &[
            "Separate server state from UI state",
            "Say when a global store is justified",
            "Mention render performance",
        ],
    },
    BankEntry {
        question: "Explain caching strategies at different layers of an application.",
        answer: "Browser caching via HTTP headers, CDN caching for static assets, application caches such as Redis, and database query caches. Choose cache-aside, write-through or TTL expiry per use case, and plan invalidation up front.",
        tips: &[
            "Walk through each layer",
            "Discuss invalidation",
            "Mention CDNs",
        ],
    },
];

const DEVOPS_TECHNICAL: &[BankEntry] = &[
    BankEntry {
        question: "Explain the CI/CD pipeline and its components.",
        answer: "Continuous integration builds and tests every merge; continuous delivery or deployment promotes passing builds through environments automatically. Stages include source trigger, build, test, artifact storage, deployment and monitoring.",
        tips: &[
            "Distinguish CI from CD",
            "Name the stages",
            "Mention concrete tools",
        ],
    },
    BankEntry {
        question: "What is Infrastructure as Code (IaC) and why is it important?",
        answer: "IaC describes infrastructure in version-controlled files applied by tools such as Terraform or Ansible. It makes environments reproducible, reviewable and quick to rebuild after a disaster.",
        tips: &[
            "Name IaC tools",
            "Compare declarative and imperative styles",
            "Mention code review for infrastructure",
        ],
    },
    BankEntry {
        question: "How do you monitor and debug issues in a distributed system?",
        answer: "Use logs, metrics and traces together, propagate correlation IDs across services, alert on symptoms users feel, and run blameless post-mortems after incidents.",
        tips: &[
            "Cover the three pillars of observability",
            "Explain distributed tracing",
            "Mention correlation IDs",
        ],
    },
    BankEntry {
        question: "Explain containerization and orchestration with Docker and Kubernetes.",
        answer: "Containers package an application with its dependencies so it runs the same everywhere. Kubernetes schedules containers across a cluster with self-healing, scaling, rolling updates and service discovery through pods, services and deployments.",
        tips: &[
            "Contrast containers with VMs",
            "Name core Kubernetes objects",
            "Explain the operational benefit",
        ],
    },
    BankEntry {
        question: "What are blue-green deployments and canary releases?",
        answer: "Blue-green keeps two production environments and switches traffic between them, giving instant rollback. Canary releases send a small share of traffic to the new version and widen it while metrics stay healthy.",
        tips: &[
            "Compare both strategies",
            "Say when each fits",
            "Mention the metrics you would watch",
        ],
    },
];

/// Role-specific technical questions. Roles without a bank use the fullstack bank.
pub fn technical_for(role: RoleType) -> &'static [BankEntry] {
    match role {
        RoleType::Frontend => FRONTEND_TECHNICAL,
        RoleType::Backend => BACKEND_TECHNICAL,
        RoleType::Devops => DEVOPS_TECHNICAL,
        _ => FULLSTACK_TECHNICAL,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// System design
// ────────────────────────────────────────────────────────────────────────────

pub const BASE_SYSTEM_DESIGN: &[BankEntry] = &[
    BankEntry {
        question: "Design a chat application with real-time messaging capabilities.",
        answer: "WebSocket gateways for live delivery, a message queue between gateways, durable message storage, a presence service and push notifications. Address ordering, delivery guarantees, group fan-out, history search and offline clients.",
        tips: &[
            "Discuss scaling WebSocket connections",
            "Explain delivery guarantees",
            "Cover presence and offline support",
        ],
    },
    BankEntry {
        question: "How would you design a rate limiting system for an API?",
        answer: "Compare token bucket, leaky bucket, fixed window and sliding window algorithms. Enforce limits in middleware keyed by user, IP or API key, share counters through a fast store such as Redis, and return 429 with rate limit headers.",
        tips: &[
            "Compare the algorithms",
            "Discuss distributed counters",
            "Mention headers and status codes",
        ],
    },
];

const FRONTEND_SYSTEM_DESIGN: &[BankEntry] = &[
    BankEntry {
        question: "Design a real-time collaborative document editor like Google Docs.",
        answer: "Clients exchange operations over WebSockets; OT or CRDTs merge concurrent edits; a coordination service orders operations per document and snapshots history. Cover cursors and presence, offline edits and sharding documents across servers.",
        tips: &[
            "Compare OT and CRDTs",
            "Discuss concurrent edits",
            "Cover offline sync",
        ],
    },
    BankEntry {
        question: "How would you implement infinite scrolling with optimal performance?",
        answer: "Trigger loads with an Intersection Observer, fetch with cursor-based pagination, render only visible rows with windowing, and show skeletons while loading. Consider accessibility, a fallback load-more control and memory use on long sessions.",
        tips: &[
            "Explain virtualization",
            "Mention Intersection Observer",
            "Consider accessibility",
        ],
    },
];

const BACKEND_SYSTEM_DESIGN: &[BankEntry] = &[
    BankEntry {
        question: "Design a URL shortening service like bit.ly with analytics.",
        answer: "Generate short codes with base62 encoding of an ID or a hash, store mappings in a replicated key-value store fronted by a cache, and record clicks asynchronously through a queue for analytics. Handle collisions, custom aliases, expiry and abuse.",
        tips: &[
            "Discuss code generation",
            "Justify the storage choice",
            "Explain the analytics path",
        ],
    },
    BankEntry {
        question: "Design a distributed cache system like Redis.",
        answer: "An in-memory key-value store with eviction policies and TTLs, snapshot and append-only persistence, primary-replica replication and consistent hashing for sharding. Address stampedes, invalidation and network partitions.",
        tips: &[
            "Explain eviction policies",
            "Discuss replication and consistency",
            "Cover failure scenarios",
        ],
    },
];

const FULLSTACK_SYSTEM_DESIGN: &[BankEntry] = &[
    BankEntry {
        question: "Design a social media platform like Twitter.",
        answer: "Separate services for users, posts, timelines, notifications, media and search. Timelines are the crux: fan-out on write for most users, fan-out on read for very large accounts. Back it with caches, a CDN for media and a search index.",
        tips: &[
            "Explain feed generation",
            "Discuss service boundaries",
            "Plan for traffic spikes",
        ],
    },
    BankEntry {
        question: "Design a ride-sharing application like Uber.",
        answer: "Drivers stream locations into a geospatial index; a matching service pairs riders with nearby drivers; pricing reacts to supply and demand; trips, payments and notifications are separate services. Focus on high-frequency location updates and peak demand.",
        tips: &[
            "Discuss geospatial indexing",
            "Explain matching",
            "Cover surge pricing",
        ],
    },
];

const DEVOPS_SYSTEM_DESIGN: &[BankEntry] = &[
    BankEntry {
        question: "Design a CI/CD pipeline for a microservices architecture.",
        answer: "Each service builds an image, runs tests and security scans, and publishes an artifact; deployment goes to staging, runs integration tests, passes approval gates and rolls out with blue-green or canary. Manage secrets, versioning and rollbacks across services.",
        tips: &[
            "Walk through every stage",
            "Name the tools",
            "Cover rollback",
        ],
    },
    BankEntry {
        question: "Design a monitoring and alerting system for a distributed application.",
        answer: "Collect metrics, logs and traces from agents on every service into time-series and log stores, visualize them on dashboards, and alert on SLO burn rates. Route alerts to on-call with clear runbooks and keep noise low.",
        tips: &[
            "Cover the three pillars",
            "Define SLIs and SLOs",
            "Discuss alert fatigue",
        ],
    },
];

const DATA_SYSTEM_DESIGN: &[BankEntry] = &[
    BankEntry {
        question: "Design a recommendation system for an e-commerce platform.",
        answer: "Combine collaborative and content-based filtering; build features in batch and streaming pipelines, train models offline, serve candidates from a low-latency store and rank them online. Evaluate with A/B tests and handle cold start explicitly.",
        tips: &[
            "Compare recommendation approaches",
            "Separate offline and online parts",
            "Address cold start",
        ],
    },
    BankEntry {
        question: "Design a data pipeline for processing real-time analytics.",
        answer: "Ingest events through a log such as Kafka, process them with a stream processor using windowed aggregation, and land results in a warehouse and serving store. Address exactly-once semantics, late data, schema evolution and backpressure.",
        tips: &[
            "Compare Lambda and Kappa architectures",
            "Discuss late-arriving data",
            "Cover fault tolerance",
        ],
    },
];

/// Role-specific system design questions, if the role has a bank.
pub fn system_design_for(role: RoleType) -> Option<&'static [BankEntry]> {
    match role {
        RoleType::Frontend => Some(FRONTEND_SYSTEM_DESIGN),
        RoleType::Backend => Some(BACKEND_SYSTEM_DESIGN),
        RoleType::Fullstack => Some(FULLSTACK_SYSTEM_DESIGN),
        RoleType::Devops => Some(DEVOPS_SYSTEM_DESIGN),
        RoleType::Data => Some(DATA_SYSTEM_DESIGN),
        _ => None,
    }
}
