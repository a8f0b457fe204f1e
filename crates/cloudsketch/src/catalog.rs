//! The three webapp-demo diagrams.
//!
//! Every node, cluster and edge here is literal content; building a diagram
//! cannot fail except through [`Color`] parsing of the fixed color names.

use std::iter;

use cloudsketch_core::{
    DiagramError,
    color::Color,
    diagram::{Connector, Diagram},
    identifier::Id,
    kind::NodeKind,
    style::{Direction, LineStyle},
};

use crate::export::OutputFormat;

/// A diagram together with how the driver announces it.
#[derive(Debug, Clone)]
pub struct Blueprint {
    diagram: Diagram,
    label: &'static str,
    summary: &'static str,
}

impl Blueprint {
    /// Pairs a diagram with its status-line label and summary text.
    pub fn new(diagram: Diagram, label: &'static str, summary: &'static str) -> Self {
        Self {
            diagram,
            label,
            summary,
        }
    }

    /// The diagram description handed to the exporter.
    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    /// Status-line label, e.g. "Main architecture diagram".
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// One-line description used in the summary of created files.
    pub fn summary(&self) -> &'static str {
        self.summary
    }

    /// Output file name for `format`; the stem is the diagram name.
    pub fn file_name(&self, format: OutputFormat) -> String {
        format!("{}.{}", self.diagram.name(), format.extension())
    }
}

/// All diagrams in generation order.
pub fn blueprints() -> Result<Vec<Blueprint>, DiagramError> {
    Ok(vec![
        Blueprint::new(
            pipeline_architecture()?,
            "Main architecture diagram",
            "Main architecture diagram",
        ),
        Blueprint::new(
            cost_breakdown(),
            "Cost breakdown diagram",
            "Cost breakdown visualization",
        ),
        Blueprint::new(
            deployment_flow(),
            "Deployment flow diagram",
            "CI/CD deployment flow",
        ),
    ])
}

/// CI/CD pipeline and the AWS services it provisions.
pub fn pipeline_architecture() -> Result<Diagram, DiagramError> {
    let mut d = Diagram::new(
        "webapp_demo_architecture",
        "Webapp Demo - AWS CI/CD Pipeline Architecture (Free Tier)",
    )
    .with_direction(Direction::TopBottom)
    .with_graph_attr("fontsize", "20")
    .with_graph_attr("bgcolor", "white")
    .with_graph_attr("rankdir", "TB")
    .with_graph_attr("splines", "ortho")
    .with_graph_attr("nodesep", "1.0")
    .with_graph_attr("ranksep", "1.5")
    .with_node_attr("fontsize", "12")
    .with_node_attr("fontname", "Arial")
    .with_edge_attr("fontsize", "10")
    .with_edge_attr("fontname", "Arial");

    let users = d.node("users", NodeKind::Users, "End Users");

    let github_repo = d.cluster("Development Environment", |dev| {
        dev.node(
            "github_repo",
            NodeKind::Github,
            "GitHub Repository\n(webapp-demo)",
        )
    });

    let (validation, build, testing, deployment, monitoring) =
        d.cluster("CI/CD Pipeline (GitHub Actions)", |ci| {
            ci.cluster("Pipeline Phases", |phases| {
                (
                    phases.node(
                        "validation",
                        NodeKind::GithubActions,
                        "Pre-build Validation\n• Repository Structure\n• Cost Compliance",
                    ),
                    phases.node(
                        "build",
                        NodeKind::GithubActions,
                        "Build Phase\n• React Frontend\n• Express.js Backend\n• Artifact Creation",
                    ),
                    phases.node(
                        "testing",
                        NodeKind::GithubActions,
                        "Testing Suite\n• Unit Tests\n• Security Scans\n• Performance Tests",
                    ),
                    phases.node(
                        "deployment",
                        NodeKind::GithubActions,
                        "Deployment Phase\n• Database Setup\n• Lambda Deploy\n• Frontend Deploy",
                    ),
                    phases.node(
                        "monitoring",
                        NodeKind::GithubActions,
                        "Monitoring Setup\n• CloudWatch Alarms\n• Health Checks",
                    ),
                )
            })
        });

    let (iam_roles, s3_frontend, lambda_api, rds_postgres, cloudwatch) =
        d.cluster("AWS Infrastructure (Free Tier)", |aws| {
            let iam_roles = aws.cluster("Identity & Access Management", |iam| {
                iam.node(
                    "iam_roles",
                    NodeKind::Iam,
                    "IAM Roles\n• CodeBuild Role\n• Lambda Execution Role",
                )
            });
            let s3_frontend = aws.cluster("Frontend Hosting", |hosting| {
                hosting.node(
                    "s3_frontend",
                    NodeKind::S3,
                    "S3 Static Website\nwebapp-demo-frontend-*",
                )
            });
            let lambda_api = aws.cluster("Backend Services", |backend| {
                backend.node(
                    "lambda_api",
                    NodeKind::Lambda,
                    "Lambda Function\nwebapp-demo-api\n• Express.js Handler\n• Serverless Express",
                )
            });
            let rds_postgres = aws.cluster("Database Layer", |db| {
                db.node(
                    "rds_postgres",
                    NodeKind::Rds,
                    "RDS PostgreSQL\ndb.t2.micro\n• 20GB Storage\n• Free Tier Compliant",
                )
            });
            let cloudwatch = aws.cluster("Monitoring & Observability", |obs| {
                obs.node(
                    "cloudwatch",
                    NodeKind::CloudWatch,
                    "CloudWatch\n• Lambda Metrics\n• Error Alarms\n• Duration Alarms",
                )
            });
            (iam_roles, s3_frontend, lambda_api, rds_postgres, cloudwatch)
        });

    let (react_app, nodejs_api, postgres_db) = d.cluster("Application Components", |app| {
        (
            app.node(
                "react_app",
                NodeKind::React,
                "React Frontend\n• React Admin\n• TypeScript\n• NX Workspace",
            ),
            app.node(
                "nodejs_api",
                NodeKind::Nodejs,
                "Express.js API\n• TypeORM\n• CORS Enabled\n• PostgreSQL Driver",
            ),
            app.node(
                "postgres_db",
                NodeKind::PostgreSql,
                "PostgreSQL DB\n• User Management\n• Application Data",
            ),
        )
    });

    // Pipeline flow
    d.connect(
        github_repo,
        validation,
        Connector::labeled("Push/PR").with_style(LineStyle::Bold),
    )
    .connect(validation, build, Connector::labeled("Structure OK"))
    .connect(build, testing, Connector::labeled("Artifacts"))
    .connect(testing, deployment, Connector::labeled("Tests Pass"))
    .connect(
        deployment,
        monitoring,
        Connector::labeled("Resources Created"),
    );

    // Infrastructure
    d.connect(
        deployment,
        iam_roles,
        Connector::labeled("Creates").with_style(LineStyle::Dashed),
    )
    .connect(
        deployment,
        s3_frontend,
        Connector::labeled("Deploys").with_color(Color::new("blue")?),
    )
    .connect(
        deployment,
        lambda_api,
        Connector::labeled("Deploys").with_color(Color::new("green")?),
    )
    .connect(
        deployment,
        rds_postgres,
        Connector::labeled("Provisions").with_color(Color::new("purple")?),
    )
    .connect(
        monitoring,
        cloudwatch,
        Connector::labeled("Configures").with_color(Color::new("orange")?),
    );

    // Application layer
    d.connect(react_app, s3_frontend, Connector::labeled("Builds to"))
        .connect(nodejs_api, lambda_api, Connector::labeled("Packages to"))
        .connect(postgres_db, rds_postgres, Connector::labeled("Connects to"));

    // Runtime
    d.connect(
        users,
        s3_frontend,
        Connector::labeled("HTTPS Requests")
            .with_color(Color::new("darkgreen")?)
            .with_style(LineStyle::Bold),
    )
    .connect(
        s3_frontend,
        lambda_api,
        Connector::labeled("API Calls").with_color(Color::new("darkblue")?),
    )
    .connect(
        lambda_api,
        rds_postgres,
        Connector::labeled("Database Queries").with_color(Color::new("darkred")?),
    )
    .connect(
        cloudwatch,
        lambda_api,
        Connector::labeled("Monitors").with_style(LineStyle::Dotted),
    )
    .connect(
        cloudwatch,
        rds_postgres,
        Connector::labeled("Monitors").with_style(LineStyle::Dotted),
    );

    // Service monitoring
    let gray = Color::new("gray")?;
    d.connect(
        lambda_api,
        cloudwatch,
        Connector::labeled("Logs/Metrics")
            .with_style(LineStyle::Dotted)
            .with_color(gray),
    )
    .connect(
        rds_postgres,
        cloudwatch,
        Connector::labeled("DB Metrics")
            .with_style(LineStyle::Dotted)
            .with_color(gray),
    );

    Ok(d)
}

/// Free-tier allowances of every service in the pipeline. No edges.
pub fn cost_breakdown() -> Diagram {
    let mut d = Diagram::new("aws_free_tier_costs", "AWS Free Tier Cost Breakdown")
        .with_direction(Direction::LeftRight);

    d.cluster("Free Tier Services ($0.00/month)", |free| {
        free.cluster("Compute", |c| {
            c.node(
                "lambda_cost",
                NodeKind::Lambda,
                "AWS Lambda\n• 1M requests/month FREE\n• 400K GB-seconds FREE",
            );
        });
        free.cluster("Storage", |c| {
            c.node(
                "s3_cost",
                NodeKind::S3,
                "Amazon S3\n• 5 GB storage FREE\n• 20K GET requests FREE\n• 2K PUT requests FREE",
            );
        });
        free.cluster("Database", |c| {
            c.node(
                "rds_cost",
                NodeKind::Rds,
                "RDS PostgreSQL\n• db.t2.micro FREE\n• 750 hours/month (12 months)\n• 20 GB storage FREE",
            );
        });
        free.cluster("Monitoring", |c| {
            c.node(
                "cloudwatch_cost",
                NodeKind::CloudWatch,
                "CloudWatch\n• 10 custom metrics FREE\n• 10 alarms FREE\n• Basic monitoring FREE",
            );
        });
        free.cluster("CI/CD", |c| {
            c.node(
                "codebuild_cost",
                NodeKind::CodeBuild,
                "GitHub Actions\n• 2,000 minutes/month FREE\n• Public repositories",
            );
        });
    });

    d
}

/// The eight workflow steps and the resources they touch.
pub fn deployment_flow() -> Diagram {
    let mut d = Diagram::new("deployment_flow", "CI/CD Deployment Flow")
        .with_direction(Direction::TopBottom);

    let source = d.node("source", NodeKind::Github, "Source Code\n(React + Express)");

    let steps = d.cluster("GitHub Actions Workflow", |workflow| {
        let kind = NodeKind::GithubActions;
        [
            ("pre_build", "1. Pre-build Validation"),
            ("env_setup", "2. Environment Setup"),
            ("build_step", "3. Build & Test"),
            ("db_setup", "4. Database Setup"),
            ("backend_deploy", "5. Lambda Deployment"),
            ("frontend_deploy", "6. Frontend Deployment"),
            ("validation_step", "7. Deployment Validation"),
            ("reporting", "8. Cost Analysis & Reporting"),
        ]
        .map(|(id, label)| workflow.node(id, kind, label))
    });
    let [_, _, _, db, backend, frontend, validation, _] = steps;

    let (lambda_func, s3_bucket, rds_db, monitoring) = d.cluster("AWS Resources", |aws| {
        (
            aws.node("lambda_func", NodeKind::Lambda, "Lambda API"),
            aws.node("s3_bucket", NodeKind::S3, "S3 Website"),
            aws.node("rds_db", NodeKind::Rds, "PostgreSQL DB"),
            aws.node("monitoring", NodeKind::CloudWatch, "CloudWatch"),
        )
    });

    let workflow: Vec<Id> = iter::once(source).chain(steps).collect();
    d.chain(&workflow);

    d.chain(&[db, rds_db])
        .chain(&[backend, lambda_func])
        .chain(&[frontend, s3_bucket])
        .chain(&[validation, monitoring]);

    d
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_every_diagram_validates() {
        for blueprint in blueprints().unwrap() {
            let diagram = blueprint.diagram();
            assert_eq!(diagram.validate(), Ok(()), "{}", blueprint.label());
        }
    }

    #[test]
    fn test_file_names_are_fixed() {
        let names: Vec<String> = blueprints()
            .unwrap()
            .iter()
            .map(|b| b.file_name(OutputFormat::Png))
            .collect();
        assert_eq!(
            names,
            [
                "webapp_demo_architecture.png",
                "aws_free_tier_costs.png",
                "deployment_flow.png"
            ]
        );
    }

    #[test]
    fn test_pipeline_architecture_shape() {
        let d = pipeline_architecture().unwrap();

        assert_eq!(d.node_count(), 15);
        assert_eq!(d.edges().len(), 20);
        assert_eq!(d.direction(), Direction::TopBottom);

        let top_clusters: Vec<_> = d.root().clusters().iter().filter_map(|c| c.label()).collect();
        assert_eq!(
            top_clusters,
            [
                "Development Environment",
                "CI/CD Pipeline (GitHub Actions)",
                "AWS Infrastructure (Free Tier)",
                "Application Components"
            ]
        );
        assert_eq!(d.root().clusters()[2].clusters().len(), 5);
    }

    #[test]
    fn test_pipeline_architecture_edge_styles() {
        let d = pipeline_architecture().unwrap();
        let first = &d.edges()[0];

        assert_eq!(first.source(), "github_repo");
        assert_eq!(first.target(), "validation");
        assert_eq!(first.connector().label(), Some("Push/PR"));
        assert_eq!(first.connector().style(), LineStyle::Bold);

        let dotted = d
            .edges()
            .iter()
            .filter(|e| e.connector().style() == LineStyle::Dotted)
            .count();
        assert_eq!(dotted, 4);

        let https = d
            .edges()
            .iter()
            .find(|e| e.connector().label() == Some("HTTPS Requests"))
            .unwrap();
        assert_eq!(https.connector().color().unwrap().to_hex(), "#006400");
    }

    #[test]
    fn test_cost_breakdown_has_no_edges() {
        let d = cost_breakdown();

        assert_eq!(d.direction(), Direction::LeftRight);
        assert_eq!(d.node_count(), 5);
        assert!(d.edges().is_empty());

        let free = &d.root().clusters()[0];
        assert_eq!(free.label(), Some("Free Tier Services ($0.00/month)"));
        assert_eq!(free.clusters().len(), 5);
    }

    #[test]
    fn test_deployment_flow_chain() {
        let d = deployment_flow();

        assert_eq!(d.node_count(), 13);
        assert_eq!(d.edges().len(), 12);

        let pairs: HashSet<String> = d
            .edges()
            .iter()
            .map(|e| format!("{} -> {}", e.source(), e.target()))
            .collect();
        for pair in [
            "source -> pre_build",
            "validation_step -> reporting",
            "db_setup -> rds_db",
            "validation_step -> monitoring",
        ] {
            assert!(pairs.contains(pair), "missing edge {pair}");
        }
        assert!(d.edges().iter().all(|e| e.connector().label().is_none()));
    }

    #[test]
    fn test_node_ids_are_diagram_local() {
        // `monitoring` names a pipeline phase in one diagram and CloudWatch in another.
        let architecture = pipeline_architecture().unwrap();
        let flow = deployment_flow();
        let id = Id::new("monitoring");

        assert_eq!(
            architecture.find_node(id).unwrap().kind(),
            NodeKind::GithubActions
        );
        assert_eq!(flow.find_node(id).unwrap().kind(), NodeKind::CloudWatch);
    }
}
