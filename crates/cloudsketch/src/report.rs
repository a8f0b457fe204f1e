//! HTML report describing the pipeline.
//!
//! The report is a single self-contained document rendered from
//! `templates/report.html`: inline CSS, literal prose, and `<img>`
//! references to the diagram files written next to it.

use askama::Template;

use crate::export::OutputFormat;

/// File name of the generated report.
pub const REPORT_FILE_NAME: &str = "pipeline_architecture_report.html";

const TITLE: &str = "Webapp Demo - CI/CD Pipeline Architecture Report";
const GENERATED_ON: &str = "July 30, 2025";

const TECH_STACK: [&str; 10] = [
    "React",
    "Express.js",
    "PostgreSQL",
    "AWS Lambda",
    "Amazon S3",
    "Amazon RDS",
    "GitHub Actions",
    "CloudWatch",
    "TypeScript",
    "NX Workspace",
];

/// A bold term followed by its explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub term: &'static str,
    pub detail: &'static str,
}

const fn entry(term: &'static str, detail: &'static str) -> Entry {
    Entry { term, detail }
}

const PIPELINE_STEPS: [Entry; 8] = [
    entry(
        "Pre-build Validation",
        "Repository structure validation and cost compliance checks",
    ),
    entry(
        "Environment Setup",
        "Node.js environment, AWS credentials, and dependency installation",
    ),
    entry(
        "Build & Test",
        "React frontend and Express.js backend compilation with comprehensive testing",
    ),
    entry(
        "Database Setup",
        "RDS PostgreSQL instance provisioning with free tier configuration",
    ),
    entry(
        "Backend Deployment",
        "Lambda function deployment with serverless Express.js handler",
    ),
    entry(
        "Frontend Deployment",
        "S3 static website hosting with public read access",
    ),
    entry(
        "Monitoring Setup",
        "CloudWatch alarms for error rates and performance monitoring",
    ),
    entry(
        "Validation & Reporting",
        "Health checks, cost analysis, and comprehensive reporting",
    ),
];

/// A priced line of the cost analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostItem {
    pub service: &'static str,
    pub price: &'static str,
    pub allowance: &'static str,
}

const FREE: &str = "$0.00/month";

/// The five services followed by the total.
pub const COST_ITEMS: [CostItem; 6] = [
    CostItem {
        service: "Amazon S3",
        price: FREE,
        allowance: "5 GB storage, 20K GET requests, 2K PUT requests included in free tier",
    },
    CostItem {
        service: "AWS Lambda",
        price: FREE,
        allowance: "1M requests and 400K GB-seconds of compute time included",
    },
    CostItem {
        service: "Amazon RDS",
        price: FREE,
        allowance: "750 hours of db.t2.micro and 20 GB storage (12 months free)",
    },
    CostItem {
        service: "CloudWatch",
        price: FREE,
        allowance: "10 custom metrics, 10 alarms, and basic monitoring included",
    },
    CostItem {
        service: "GitHub Actions",
        price: FREE,
        allowance: "2,000 minutes per month for public repositories",
    },
    CostItem {
        service: "Total Monthly Cost",
        price: FREE,
        allowance: "All services within AWS Free Tier limits",
    },
];

#[derive(Debug, Clone, Copy)]
struct Endpoint {
    name: &'static str,
    value: &'static str,
    description: &'static str,
}

const ENDPOINTS: [Endpoint; 3] = [
    Endpoint {
        name: "Frontend URL",
        value: "http://webapp-demo-frontend-073651099697.s3-website-us-east-1.amazonaws.com",
        description: "React application hosted on S3 static website",
    },
    Endpoint {
        name: "API Endpoint",
        value: "Generated during Lambda deployment",
        description: "Express.js API running on AWS Lambda with Function URLs",
    },
    Endpoint {
        name: "Database Connection",
        value: "RDS PostgreSQL endpoint (private)",
        description: "Database accessible only from Lambda functions",
    },
];

const CLEANUP_OPTIONS: [Entry; 3] = [
    entry(
        "Immediately",
        "Delete all resources right after validation to minimize any potential costs",
    ),
    entry(
        "15-60 minutes",
        "Scheduled cleanup allowing for testing and validation",
    ),
    entry(
        "No cleanup",
        "Keep resources active for continued development (recommended for learning)",
    ),
];

const CLEANUP_RECOMMENDATION: &str = "For production use, implement the scheduled cleanup. \
     For learning and development, keep resources active as they remain within free tier limits.";

const MONITORING: [Entry; 4] = [
    entry(
        "Lambda Error Rate Monitoring",
        "Alarms trigger if error rate exceeds 5 errors in 10 minutes",
    ),
    entry(
        "Lambda Duration Monitoring",
        "Alerts for functions taking longer than 25 seconds",
    ),
    entry(
        "Database Connection Monitoring",
        "RDS performance insights for query optimization",
    ),
    entry(
        "S3 Request Monitoring",
        "Track frontend access patterns and performance",
    ),
];

const SECURITY: [Entry; 5] = [
    entry(
        "IAM Roles",
        "Least privilege access for CodeBuild and Lambda execution",
    ),
    entry(
        "Security Scanning",
        "Automated vulnerability assessment in CI/CD pipeline",
    ),
    entry(
        "Environment Variables",
        "Secure handling of database credentials and API keys",
    ),
    entry(
        "CORS Configuration",
        "Proper cross-origin resource sharing setup",
    ),
    entry(
        "Input Validation",
        "TypeORM and Express.js security middleware",
    ),
];

const NEXT_STEPS: [Entry; 6] = [
    entry(
        "Execute Pipeline",
        "Run the GitHub Actions workflow manually or via push to trigger deployment",
    ),
    entry(
        "Monitor Deployment",
        "Track progress in GitHub Actions and AWS CloudWatch",
    ),
    entry(
        "Validate Endpoints",
        "Test frontend and API functionality after deployment",
    ),
    entry(
        "Review Logs",
        "Check Lambda function logs and performance metrics",
    ),
    entry(
        "Optimize Performance",
        "Use CloudWatch insights to identify optimization opportunities",
    ),
    entry(
        "Plan Scaling",
        "When ready to move beyond free tier, consider ECS/Fargate for backend",
    ),
];

#[derive(Debug, Clone, Copy)]
struct SupportLink {
    label: &'static str,
    url: &'static str,
    text: &'static str,
}

const SUPPORT_LINKS: [SupportLink; 3] = [
    SupportLink {
        label: "GitHub Repository",
        url: "https://github.com/softengrahmed/webapp-demo",
        text: "webapp-demo",
    },
    SupportLink {
        label: "Pipeline Status",
        url: "https://github.com/softengrahmed/webapp-demo/issues/2",
        text: "GitHub Issue #2",
    },
    SupportLink {
        label: "AWS Documentation",
        url: "https://docs.aws.amazon.com/free/",
        text: "AWS Free Tier Guide",
    },
];

/// A generated diagram referenced from the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Figure {
    caption: String,
    file_name: String,
    format: OutputFormat,
}

impl Figure {
    /// Creates a figure for a diagram written as `file_name` in `format`.
    pub fn new(
        caption: impl Into<String>,
        file_name: impl Into<String>,
        format: OutputFormat,
    ) -> Self {
        Self {
            caption: caption.into(),
            file_name: file_name.into(),
            format,
        }
    }

    /// Text shown under the image and used as its `alt` text.
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// File name relative to the report.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Whether a browser can show the file inline.
    pub fn is_image(&self) -> bool {
        self.format.is_image()
    }
}

#[derive(Template)]
#[template(path = "report.html")]
struct ReportTemplate<'a> {
    title: &'a str,
    generated_on: &'a str,
    tech_stack: &'a [&'a str],
    figures: &'a [Figure],
    pipeline_steps: &'a [Entry],
    cost_items: &'a [CostItem],
    endpoints: &'a [Endpoint],
    cleanup_options: &'a [Entry],
    cleanup_recommendation: &'a str,
    monitoring: &'a [Entry],
    security: &'a [Entry],
    next_steps: &'a [Entry],
    support_links: &'a [SupportLink],
}

/// Renders the complete report document.
///
/// `figures` are shown in the Architecture Overview, in order. Images are
/// embedded with `<img>`; DOT sources are linked instead since browsers
/// cannot display them. Text is HTML-escaped by the template.
///
/// # Errors
///
/// Returns the template error if rendering fails.
pub fn render(figures: &[Figure]) -> askama::Result<String> {
    let template = ReportTemplate {
        title: TITLE,
        generated_on: GENERATED_ON,
        tech_stack: &TECH_STACK,
        figures,
        pipeline_steps: &PIPELINE_STEPS,
        cost_items: &COST_ITEMS,
        endpoints: &ENDPOINTS,
        cleanup_options: &CLEANUP_OPTIONS,
        cleanup_recommendation: CLEANUP_RECOMMENDATION,
        monitoring: &MONITORING,
        security: &SECURITY,
        next_steps: &NEXT_STEPS,
        support_links: &SUPPORT_LINKS,
    };
    template.render()
}
