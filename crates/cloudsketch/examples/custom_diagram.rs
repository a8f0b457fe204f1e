//! Example: Building a diagram with the declarative API
//!
//! Declares a small static-site stack and prints its Graphviz description.
//! Pipe the output to `dot -Tsvg` to render it.

use cloudsketch::{
    color::Color,
    diagram::{Connector, Diagram},
    export::graphviz,
    kind::NodeKind,
    style::{Direction, LineStyle},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut diagram = Diagram::new("static_site", "Static Site")
        .with_direction(Direction::LeftRight);

    let users = diagram.node("users", NodeKind::Users, "Visitors");
    let (cdn, bucket) = diagram.cluster("Hosting", |hosting| {
        (
            hosting.node("cdn", NodeKind::CloudFront, "CloudFront"),
            hosting.node("bucket", NodeKind::S3, "S3 Bucket"),
        )
    });
    let logs = diagram.node("logs", NodeKind::CloudWatch, "Access Logs");

    diagram
        .connect(users, cdn, Connector::labeled("HTTPS"))
        .connect(cdn, bucket, Connector::labeled("Origin fetch"))
        .connect(
            cdn,
            logs,
            Connector::new()
                .with_style(LineStyle::Dotted)
                .with_color(Color::new("gray")?),
        );

    diagram.validate()?;
    println!("{}", graphviz::to_dot(&diagram, None));

    Ok(())
}
