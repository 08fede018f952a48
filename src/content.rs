//! Hand-authored portfolio content. Prose that changes with the locale lives
//! in the translation tables; this module holds everything that does not.

use crate::dictionary::{Dictionary, ProblemText, TitledText};

#[derive(Debug)]
pub struct Profile {
    pub name: &'static str,
    pub handle: &'static str,
    pub avatar_url: &'static str,
    pub github_url: &'static str,
    pub github_handle: &'static str,
    pub linkedin_url: &'static str,
    pub linkedin_handle: &'static str,
    pub email: &'static str,
    pub location: &'static str,
}

pub static PROFILE: Profile = Profile {
    name: "Jorge Bastidas",
    handle: "decode9",
    avatar_url: "https://avatars.githubusercontent.com/u/25024663?v=4",
    github_url: "https://github.com/decode9",
    github_handle: "@decode9",
    linkedin_url: "https://linkedin.com/in/decode9",
    linkedin_handle: "/in/decode9",
    email: "jbastidas@theempire.tech",
    location: "Argentina",
};

pub const PUBLIC_REPOS: u32 = 41;
pub const PROJECTS_DELIVERED: u32 = 50;
pub const SATISFACTION_PERCENT: u32 = 100;

/// Matches the "10+ years" stated in the page copy and metadata.
pub const YEARS_OF_EXPERIENCE: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TechCategory {
    Language,
    Frontend,
    Backend,
    Database,
    Devops,
    Tools,
}

impl TechCategory {
    pub const ALL: [TechCategory; 6] = [
        Self::Language,
        Self::Frontend,
        Self::Backend,
        Self::Database,
        Self::Devops,
        Self::Tools,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Language => "language",
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Database => "database",
            Self::Devops => "devops",
            Self::Tools => "tools",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.slug() == slug)
    }

    pub fn label(self, dictionary: &Dictionary) -> &str {
        let categories = &dictionary.tech.categories;
        match self {
            Self::Language => &categories.language,
            Self::Frontend => &categories.frontend,
            Self::Backend => &categories.backend,
            Self::Database => &categories.database,
            Self::Devops => &categories.devops,
            Self::Tools => &categories.tools,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Proficiency {
    Expert,
    Advanced,
    Intermediate,
}

impl Proficiency {
    pub fn label(self, dictionary: &Dictionary) -> &str {
        let labels = &dictionary.tech.proficiency;
        match self {
            Self::Expert => &labels.expert,
            Self::Advanced => &labels.advanced,
            Self::Intermediate => &labels.intermediate,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Expert => "expert",
            Self::Advanced => "advanced",
            Self::Intermediate => "intermediate",
        }
    }
}

#[derive(Debug)]
pub struct Technology {
    pub name: &'static str,
    pub category: TechCategory,
    pub proficiency: Proficiency,
    pub color: &'static str,
}

const fn tech(
    name: &'static str,
    category: TechCategory,
    proficiency: Proficiency,
    color: &'static str,
) -> Technology {
    Technology {
        name,
        category,
        proficiency,
        color,
    }
}

use Proficiency::{Advanced, Expert, Intermediate};
use TechCategory::{Backend, Database, Devops, Frontend, Language, Tools};

pub static TECHNOLOGIES: &[Technology] = &[
    tech("TypeScript", Language, Expert, "#3178C6"),
    tech("JavaScript", Language, Expert, "#F7DF1E"),
    tech("Python", Language, Advanced, "#3776AB"),
    tech("Java", Language, Advanced, "#ED8B00"),
    tech("C#", Language, Advanced, "#512BD4"),
    tech("PHP", Language, Advanced, "#777BB4"),
    tech("React", Frontend, Expert, "#61DAFB"),
    tech("Next.js", Frontend, Expert, "#FFFFFF"),
    tech("React Native", Frontend, Expert, "#61DAFB"),
    tech("Tailwind CSS", Frontend, Expert, "#06B6D4"),
    tech("GraphQL", Frontend, Advanced, "#E10098"),
    tech("Node.js", Backend, Expert, "#339933"),
    tech("Express", Backend, Expert, "#FFFFFF"),
    tech("NestJS", Backend, Advanced, "#E0234E"),
    tech("gRPC", Backend, Advanced, "#244C5A"),
    tech("PostgreSQL", Database, Expert, "#4169E1"),
    tech("MongoDB", Database, Expert, "#47A248"),
    tech("MySQL", Database, Advanced, "#4479A1"),
    tech("Redis", Database, Advanced, "#DC382D"),
    tech("SQLite", Database, Advanced, "#003B57"),
    tech("Docker", Devops, Expert, "#2496ED"),
    tech("Kubernetes", Devops, Advanced, "#326CE5"),
    tech("AWS", Devops, Advanced, "#FF9900"),
    tech("DigitalOcean", Devops, Expert, "#0080FF"),
    tech("GitHub Actions", Devops, Expert, "#2088FF"),
    tech("Jenkins", Devops, Advanced, "#D24939"),
    tech("Git", Tools, Expert, "#F05032"),
    tech("VS Code", Tools, Expert, "#007ACC"),
    tech("Figma", Tools, Intermediate, "#F24E1E"),
    tech("Linux", Tools, Expert, "#FCC624"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectCategory {
    Web,
    Mobile,
    Api,
    Devops,
    Automation,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 5] = [
        Self::Web,
        Self::Mobile,
        Self::Api,
        Self::Devops,
        Self::Automation,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Mobile => "mobile",
            Self::Api => "api",
            Self::Devops => "devops",
            Self::Automation => "automation",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.slug() == slug)
    }

    pub fn label(self, dictionary: &Dictionary) -> &str {
        let categories = &dictionary.projects.categories;
        match self {
            Self::Web => &categories.web,
            Self::Mobile => &categories.mobile,
            Self::Api => &categories.api,
            Self::Devops => &categories.devops,
            Self::Automation => &categories.automation,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Web => "🌐",
            Self::Mobile => "📱",
            Self::Api => "⚡",
            Self::Devops => "🐳",
            Self::Automation => "🤖",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectId {
    Portfolio,
    MvpLauncher,
    FleetTracker,
    PaymentsGateway,
    InfraBlueprints,
    WorkflowBots,
}

impl ProjectId {
    pub fn description(self, dictionary: &Dictionary) -> &str {
        let items = &dictionary.projects.items;
        match self {
            Self::Portfolio => &items.portfolio,
            Self::MvpLauncher => &items.mvp_launcher,
            Self::FleetTracker => &items.fleet_tracker,
            Self::PaymentsGateway => &items.payments_gateway,
            Self::InfraBlueprints => &items.infra_blueprints,
            Self::WorkflowBots => &items.workflow_bots,
        }
    }
}

#[derive(Debug)]
pub struct Project {
    pub id: ProjectId,
    pub name: &'static str,
    pub technologies: &'static [&'static str],
    pub category: ProjectCategory,
    pub repo_url: Option<&'static str>,
    pub demo_url: Option<&'static str>,
    pub featured: bool,
    pub year: i32,
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: ProjectId::Portfolio,
        name: "decode9.dev",
        technologies: &["Rust", "axum", "askama", "Tailwind CSS", "Fluent"],
        category: ProjectCategory::Web,
        repo_url: Some("https://github.com/decode9/portfolio"),
        demo_url: Some("https://decode9.dev"),
        featured: true,
        year: 2025,
    },
    Project {
        id: ProjectId::MvpLauncher,
        name: "MVP Launcher",
        technologies: &["Next.js", "TypeScript", "PostgreSQL", "Stripe", "Docker"],
        category: ProjectCategory::Web,
        repo_url: None,
        demo_url: None,
        featured: true,
        year: 2024,
    },
    Project {
        id: ProjectId::FleetTracker,
        name: "Fleet Tracker",
        technologies: &["React Native", "Node.js", "MongoDB", "WebSockets"],
        category: ProjectCategory::Mobile,
        repo_url: None,
        demo_url: None,
        featured: false,
        year: 2023,
    },
    Project {
        id: ProjectId::PaymentsGateway,
        name: "Payments Gateway",
        technologies: &["NestJS", "PostgreSQL", "Redis", "gRPC"],
        category: ProjectCategory::Api,
        repo_url: None,
        demo_url: None,
        featured: true,
        year: 2023,
    },
    Project {
        id: ProjectId::InfraBlueprints,
        name: "Infra Blueprints",
        technologies: &["Kubernetes", "Docker", "GitHub Actions", "AWS", "DigitalOcean"],
        category: ProjectCategory::Devops,
        repo_url: None,
        demo_url: None,
        featured: false,
        year: 2022,
    },
    Project {
        id: ProjectId::WorkflowBots,
        name: "Workflow Bots",
        technologies: &["Python", "Node.js", "Slack API"],
        category: ProjectCategory::Automation,
        repo_url: None,
        demo_url: None,
        featured: false,
        year: 2021,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArchitectureId {
    Microservices,
    CleanArchitecture,
    EventDriven,
    Cqrs,
}

impl ArchitectureId {
    pub fn slug(self) -> &'static str {
        match self {
            Self::Microservices => "microservices",
            Self::CleanArchitecture => "clean-architecture",
            Self::EventDriven => "event-driven",
            Self::Cqrs => "cqrs",
        }
    }

    pub fn text(self, dictionary: &Dictionary) -> &TitledText {
        let examples = &dictionary.architecture.examples;
        match self {
            Self::Microservices => &examples.microservices,
            Self::CleanArchitecture => &examples.clean,
            Self::EventDriven => &examples.event,
            Self::Cqrs => &examples.cqrs,
        }
    }
}

#[derive(Debug)]
pub struct ArchitectureExample {
    pub id: ArchitectureId,
    pub code: &'static str,
    pub language: &'static str,
    pub tags: &'static [&'static str],
}

pub static ARCHITECTURE_EXAMPLES: &[ArchitectureExample] = &[
    ArchitectureExample {
        id: ArchitectureId::Microservices,
        code: r#"// API gateway: single entry point
import express from 'express';
import { createProxyMiddleware } from 'http-proxy-middleware';
import CircuitBreaker from 'opossum';

const app = express();

app.use('/api/users', createProxyMiddleware({
  target: process.env.USER_SERVICE_URL,
  changeOrigin: true,
  pathRewrite: { '^/api/users': '' },
}));

app.get('/health', (req, res) => {
  res.json({ status: 'healthy', timestamp: new Date() });
});

const breaker = new CircuitBreaker(callOrderService, {
  timeout: 3000,
  errorThresholdPercentage: 50,
  resetTimeout: 30000,
});
breaker.fallback(() => ({ cached: true, data: cachedOrders }));"#,
        language: "typescript",
        tags: &["microservices", "api-gateway", "circuit-breaker", "docker"],
    },
    ArchitectureExample {
        id: ArchitectureId::CleanArchitecture,
        code: r#"// Domain layer
interface UserRepository {
  findById(id: string): Promise<User | null>;
  save(user: User): Promise<void>;
}

// Application layer
class CreateUserUseCase {
  constructor(
    private users: UserRepository,
    private mailer: EmailService,
  ) {}

  async execute(data: CreateUserDTO): Promise<User> {
    if (!isValidEmail(data.email)) {
      throw new DomainError('Invalid email');
    }
    const user = { id: generateUUID(), ...data, createdAt: new Date() };
    await this.users.save(user);
    await this.mailer.sendWelcome(user.email);
    return user;
  }
}

// Infrastructure layer
class PostgresUserRepository implements UserRepository { /* ... */ }"#,
        language: "typescript",
        tags: &["clean-architecture", "solid", "dependency-injection"],
    },
    ArchitectureExample {
        id: ArchitectureId::EventDriven,
        code: r#"// Event bus on Redis pub/sub
class EventBus {
  private publisher = new Redis(process.env.REDIS_URL);
  private subscriber = new Redis(process.env.REDIS_URL);
  private handlers = new Map<string, Handler[]>();

  async publish<T>(name: string, payload: T): Promise<void> {
    const event = { id: generateUUID(), name, payload, timestamp: new Date().toISOString() };
    await this.publisher.publish(name, JSON.stringify(event));
  }

  subscribe(name: string, handler: Handler): void {
    if (!this.handlers.has(name)) {
      this.handlers.set(name, []);
      this.subscriber.subscribe(name);
    }
    this.handlers.get(name)!.push(handler);
  }
}

eventBus.subscribe('user.created', async (event) => {
  await sendWelcomeEmail(event.payload);
});"#,
        language: "typescript",
        tags: &["event-driven", "redis", "pub-sub", "async"],
    },
    ArchitectureExample {
        id: ArchitectureId::Cqrs,
        code: r#"// Command side
class CreateOrderCommand implements Command {
  constructor(private orders: OrderRepository, private bus: EventBus, private data: CreateOrderDTO) {}

  async execute(): Promise<void> {
    const order = Order.create(this.data);
    await this.orders.save(order);
    await this.bus.publish('order.created', { orderId: order.id, total: order.total });
  }
}

// Query side: denormalized read model
class OrderQueryService {
  constructor(private readDb: ReadDatabase) {}

  getOrdersByUser(userId: string): Promise<OrderView[]> {
    return this.readDb.query('SELECT * FROM order_views WHERE user_id = $1', [userId]);
  }
}

// Keeps the read model in sync
bus.subscribe('order.created', (event) =>
  readDb.upsert('order_views', { id: event.payload.orderId, total: event.payload.total }));"#,
        language: "typescript",
        tags: &["cqrs", "event-sourcing", "read-model", "write-model"],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self, dictionary: &Dictionary) -> &str {
        let labels = &dictionary.problems.difficulty;
        match self {
            Self::Easy => &labels.easy,
            Self::Medium => &labels.medium,
            Self::Hard => &labels.hard,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProblemId {
    MemoryLeakReact,
    NPlusOne,
    RaceCondition,
    DebounceThrottle,
}

impl ProblemId {
    pub fn slug(self) -> &'static str {
        match self {
            Self::MemoryLeakReact => "memory-leak-react",
            Self::NPlusOne => "n-plus-one",
            Self::RaceCondition => "race-condition",
            Self::DebounceThrottle => "debounce-throttle",
        }
    }

    pub fn text(self, dictionary: &Dictionary) -> &ProblemText {
        let items = &dictionary.problems.items;
        match self {
            Self::MemoryLeakReact => &items.memory_leak,
            Self::NPlusOne => &items.n_plus_one,
            Self::RaceCondition => &items.race_condition,
            Self::DebounceThrottle => &items.debounce_throttle,
        }
    }
}

#[derive(Debug)]
pub struct CodeProblem {
    pub id: ProblemId,
    pub problem: &'static str,
    pub solution: &'static str,
    pub language: &'static str,
    pub difficulty: Difficulty,
    pub tags: &'static [&'static str],
}

pub static CODE_PROBLEMS: &[CodeProblem] = &[
    CodeProblem {
        id: ProblemId::MemoryLeakReact,
        problem: r#"// ❌ State updates may run after unmount
function UserProfile({ userId }) {
  const [user, setUser] = useState(null);

  useEffect(() => {
    fetchUser(userId).then((data) => setUser(data));
  }, [userId]);

  return user ? <div>{user.name}</div> : <Spinner />;
}"#,
        solution: r#"// ✅ Cancel the request in the cleanup function
function UserProfile({ userId }) {
  const [user, setUser] = useState(null);

  useEffect(() => {
    const controller = new AbortController();
    fetchUser(userId, { signal: controller.signal })
      .then((data) => setUser(data))
      .catch((err) => {
        if (err.name !== 'AbortError') throw err;
      });
    return () => controller.abort();
  }, [userId]);

  return user ? <div>{user.name}</div> : <Spinner />;
}"#,
        language: "typescript",
        difficulty: Difficulty::Medium,
        tags: &["react", "hooks", "memory-leak", "async"],
    },
    CodeProblem {
        id: ProblemId::NPlusOne,
        problem: r#"// ❌ One query for the orders, then one more per order
async function getOrdersWithProducts(userId: string) {
  const orders = await db.query('SELECT * FROM orders WHERE user_id = $1', [userId]);
  for (const order of orders) {
    order.products = await db.query(
      'SELECT p.* FROM products p JOIN order_items oi ON p.id = oi.product_id WHERE oi.order_id = $1',
      [order.id],
    );
  }
  return orders; // 100 orders = 101 queries
}"#,
        solution: r#"// ✅ A single query with JOIN and aggregation
async function getOrdersWithProducts(userId: string) {
  const result = await db.query(`
    SELECT o.id, o.total, json_agg(p.*) AS products
    FROM orders o
    LEFT JOIN order_items oi ON o.id = oi.order_id
    LEFT JOIN products p ON oi.product_id = p.id
    WHERE o.user_id = $1
    GROUP BY o.id
  `, [userId]);
  return result.rows;
}"#,
        language: "typescript",
        difficulty: Difficulty::Medium,
        tags: &["sql", "performance", "database", "optimization"],
    },
    CodeProblem {
        id: ProblemId::RaceCondition,
        problem: r#"// ❌ Balance can change between the read and the write
async function transferMoney(fromId, toId, amount) {
  const from = await db.query('SELECT balance FROM accounts WHERE id = $1', [fromId]);
  if (from.balance < amount) throw new Error('Insufficient funds');

  await db.query('UPDATE accounts SET balance = balance - $1 WHERE id = $2', [amount, fromId]);
  await db.query('UPDATE accounts SET balance = balance + $1 WHERE id = $2', [amount, toId]);
}"#,
        solution: r#"// ✅ Transaction with row locks
async function transferMoney(fromId, toId, amount) {
  const client = await db.pool.connect();
  try {
    await client.query('BEGIN');
    const from = await client.query(
      'SELECT balance FROM accounts WHERE id = $1 FOR UPDATE', [fromId]);
    if (from.rows[0].balance < amount) throw new Error('Insufficient funds');

    await client.query('UPDATE accounts SET balance = balance - $1 WHERE id = $2', [amount, fromId]);
    await client.query('UPDATE accounts SET balance = balance + $1 WHERE id = $2', [amount, toId]);
    await client.query('COMMIT');
  } catch (error) {
    await client.query('ROLLBACK');
    throw error;
  } finally {
    client.release();
  }
}"#,
        language: "typescript",
        difficulty: Difficulty::Hard,
        tags: &["database", "concurrency", "transactions", "locking"],
    },
    CodeProblem {
        id: ProblemId::DebounceThrottle,
        problem: r#"// ❌ One request per keystroke
function SearchInput() {
  const [query, setQuery] = useState('');
  const [results, setResults] = useState([]);

  const handleChange = async (e) => {
    setQuery(e.target.value);
    setResults(await searchAPI(e.target.value));
  };

  return <input value={query} onChange={handleChange} />;
}"#,
        solution: r#"// ✅ Debounce the query before searching
function useDebounce<T>(value: T, delay: number): T {
  const [debounced, setDebounced] = useState(value);
  useEffect(() => {
    const timer = setTimeout(() => setDebounced(value), delay);
    return () => clearTimeout(timer);
  }, [value, delay]);
  return debounced;
}

function SearchInput() {
  const [query, setQuery] = useState('');
  const [results, setResults] = useState([]);
  const debouncedQuery = useDebounce(query, 300);

  useEffect(() => {
    if (debouncedQuery) searchAPI(debouncedQuery).then(setResults);
  }, [debouncedQuery]);

  return <input value={query} onChange={(e) => setQuery(e.target.value)} />;
}"#,
        language: "typescript",
        difficulty: Difficulty::Easy,
        tags: &["react", "performance", "hooks", "optimization"],
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn category_slugs_parse_back() {
        for category in TechCategory::ALL {
            assert_eq!(TechCategory::from_slug(category.slug()), Some(category));
        }
        for category in ProjectCategory::ALL {
            assert_eq!(ProjectCategory::from_slug(category.slug()), Some(category));
        }
        assert_eq!(TechCategory::from_slug("all"), None);
        assert_eq!(ProjectCategory::from_slug("Web"), None);
    }

    #[test]
    fn every_category_has_technologies() {
        for category in TechCategory::ALL {
            assert!(
                TECHNOLOGIES.iter().any(|t| t.category == category),
                "{category:?} is empty"
            );
        }
    }

    #[test]
    fn technologies_are_grouped_by_category() {
        let mut seen = Vec::new();
        for technology in TECHNOLOGIES {
            if seen.last() != Some(&technology.category) {
                assert!(!seen.contains(&technology.category));
                seen.push(technology.category);
            }
        }
        assert_eq!(seen, TechCategory::ALL);
    }

    #[test]
    fn slugs_are_unique() {
        let architecture = ARCHITECTURE_EXAMPLES
            .iter()
            .map(|e| e.id.slug())
            .collect::<HashSet<_>>();
        assert_eq!(architecture.len(), ARCHITECTURE_EXAMPLES.len());

        let problems = CODE_PROBLEMS
            .iter()
            .map(|p| p.id.slug())
            .collect::<HashSet<_>>();
        assert_eq!(problems.len(), CODE_PROBLEMS.len());
    }
}
