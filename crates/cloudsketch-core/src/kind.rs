//! Node taxonomy.
//!
//! Every node in a diagram is one of a fixed set of [`NodeKind`]s. A kind
//! belongs to a [`Provider`] and a [`Category`]; the category decides how the
//! node is drawn, standing in for the vendor icon.

use std::fmt;

/// Who supplies the service a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Aws,
    OnPrem,
    Programming,
    Generic,
}

impl Provider {
    /// Lowercase name used in tooltips.
    pub fn name(self) -> &'static str {
        match self {
            Self::Aws => "aws",
            Self::OnPrem => "onprem",
            Self::Programming => "programming",
            Self::Generic => "generic",
        }
    }
}

/// Functional group of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Compute,
    Storage,
    Database,
    Monitoring,
    Identity,
    Network,
    Client,
    Cicd,
    SourceControl,
    Application,
}

impl Category {
    /// Lowercase name used in tooltips.
    pub fn name(self) -> &'static str {
        match self {
            Self::Compute => "compute",
            Self::Storage => "storage",
            Self::Database => "database",
            Self::Monitoring => "monitoring",
            Self::Identity => "identity",
            Self::Network => "network",
            Self::Client => "client",
            Self::Cicd => "cicd",
            Self::SourceControl => "vcs",
            Self::Application => "application",
        }
    }

    /// Graphviz node shape used for this category.
    pub fn shape(self) -> &'static str {
        match self {
            Self::Compute => "box3d",
            Self::Storage => "folder",
            Self::Database => "cylinder",
            Self::Monitoring => "note",
            Self::Identity => "octagon",
            Self::Network => "hexagon",
            Self::Client => "ellipse",
            Self::Cicd => "box",
            Self::SourceControl => "tab",
            Self::Application => "component",
        }
    }

    /// Fill color, taken from the AWS architecture icon palette where one exists.
    pub fn fill_color(self) -> &'static str {
        match self {
            Self::Compute => "#ED7100",
            Self::Storage => "#7AA116",
            Self::Database => "#C925D1",
            Self::Monitoring => "#E7157B",
            Self::Identity => "#DD344C",
            Self::Network => "#8C4FFF",
            Self::Client => "#232F3E",
            Self::Cicd => "#2088FF",
            Self::SourceControl => "#24292E",
            Self::Application => "#61DAFB",
        }
    }

    /// Label color readable on top of [`Category::fill_color`].
    pub fn font_color(self) -> &'static str {
        match self {
            Self::Application => "#2D3436",
            _ => "#FFFFFF",
        }
    }
}

/// The icon vocabulary available to diagrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Lambda,
    Ec2,
    S3,
    Rds,
    PostgreSql,
    CloudWatch,
    Iam,
    CloudFront,
    Route53,
    Users,
    Mobile,
    Tablet,
    CodeBuild,
    CodePipeline,
    GithubActions,
    Github,
    React,
    Nodejs,
}

impl NodeKind {
    /// Every kind, in declaration order.
    pub const ALL: [NodeKind; 18] = [
        Self::Lambda,
        Self::Ec2,
        Self::S3,
        Self::Rds,
        Self::PostgreSql,
        Self::CloudWatch,
        Self::Iam,
        Self::CloudFront,
        Self::Route53,
        Self::Users,
        Self::Mobile,
        Self::Tablet,
        Self::CodeBuild,
        Self::CodePipeline,
        Self::GithubActions,
        Self::Github,
        Self::React,
        Self::Nodejs,
    ];

    /// Functional group; decides the node's shape and colors.
    pub fn category(self) -> Category {
        match self {
            Self::Lambda | Self::Ec2 => Category::Compute,
            Self::S3 => Category::Storage,
            Self::Rds | Self::PostgreSql => Category::Database,
            Self::CloudWatch => Category::Monitoring,
            Self::Iam => Category::Identity,
            Self::CloudFront | Self::Route53 => Category::Network,
            Self::Users | Self::Mobile | Self::Tablet => Category::Client,
            Self::CodeBuild | Self::CodePipeline | Self::GithubActions => Category::Cicd,
            Self::Github => Category::SourceControl,
            Self::React | Self::Nodejs => Category::Application,
        }
    }

    /// Icon set the kind belongs to.
    pub fn provider(self) -> Provider {
        match self {
            Self::Lambda
            | Self::Ec2
            | Self::S3
            | Self::Rds
            | Self::CloudWatch
            | Self::Iam
            | Self::CloudFront
            | Self::Route53
            | Self::CodeBuild
            | Self::CodePipeline => Provider::Aws,
            Self::PostgreSql | Self::Users | Self::GithubActions | Self::Github => Provider::OnPrem,
            Self::React | Self::Nodejs => Provider::Programming,
            Self::Mobile | Self::Tablet => Provider::Generic,
        }
    }

    /// Product name, used as the node tooltip.
    pub fn product_name(self) -> &'static str {
        match self {
            Self::Lambda => "AWS Lambda",
            Self::Ec2 => "Amazon EC2",
            Self::S3 => "Amazon S3",
            Self::Rds => "Amazon RDS",
            Self::PostgreSql => "PostgreSQL",
            Self::CloudWatch => "Amazon CloudWatch",
            Self::Iam => "AWS IAM",
            Self::CloudFront => "Amazon CloudFront",
            Self::Route53 => "Amazon Route 53",
            Self::Users => "Users",
            Self::Mobile => "Mobile",
            Self::Tablet => "Tablet",
            Self::CodeBuild => "AWS CodeBuild",
            Self::CodePipeline => "AWS CodePipeline",
            Self::GithubActions => "GitHub Actions",
            Self::Github => "GitHub",
            Self::React => "React",
            Self::Nodejs => "Node.js",
        }
    }
}

impl fmt::Display for NodeKind {
    /// Formats as `provider/category/product`, e.g. `aws/compute/AWS Lambda`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.provider().name(),
            self.category().name(),
            self.product_name()
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_taxonomy_covers_required_categories() {
        let categories: HashSet<_> = NodeKind::ALL.iter().map(|k| k.category()).collect();
        for required in [
            Category::Compute,
            Category::Storage,
            Category::Database,
            Category::Monitoring,
            Category::Identity,
            Category::Network,
            Category::Client,
        ] {
            assert!(categories.contains(&required), "missing {required:?}");
        }
    }

    #[test]
    fn test_product_names_are_unique() {
        let names: HashSet<_> = NodeKind::ALL.iter().map(|k| k.product_name()).collect();
        assert_eq!(names.len(), NodeKind::ALL.len());
    }

    #[test]
    fn test_display() {
        assert_eq!(NodeKind::Lambda.to_string(), "aws/compute/AWS Lambda");
        assert_eq!(NodeKind::Github.to_string(), "onprem/vcs/GitHub");
        assert_eq!(NodeKind::React.to_string(), "programming/application/React");
    }

    #[test]
    fn test_fill_colors_are_hex() {
        for kind in NodeKind::ALL {
            let fill = kind.category().fill_color();
            assert!(fill.starts_with('#') && fill.len() == 7, "{kind:?}: {fill}");
        }
    }
}
