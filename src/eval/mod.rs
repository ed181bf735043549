mod analysis;
mod report;
mod summary;

pub use analysis::{analyze_simulation_file, DomainAnalysis};
pub use report::{
    render_comparison, render_domain, render_domain_error, render_domain_title, render_header,
    render_separator,
};
