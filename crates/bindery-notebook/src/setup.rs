//! Synthesized cells: the setup cell and the slide-link cell.
//!
//! The setup cell makes a published worksheet self-contained on hosted
//! runtimes: it installs the item's packages, downloads the item's data
//! bundle from the published site on GitHub, and unpacks it next to the
//! notebook. It is only added to items that ship data files.

use crate::meta::LinkRef;
use crate::model::Cell;

/// Everything the setup cell needs to know about an item.
#[derive(Debug, Clone)]
pub struct SetupCellSpec<'a> {
    /// File name of the item's data bundle (e.g. `intro-data.zip`).
    pub zip_name: &'a str,
    /// GitHub `owner/repo` the site is published from.
    pub github_repo: &'a str,
    /// Branch the site is published from.
    pub github_branch: &'a str,
    /// Directory within the repository holding the published site.
    pub site_dir: &'a str,
    /// Packages to pip-install before downloading data.
    pub install: &'a [String],
    /// Links appended to the cell as comments.
    pub links: &'a [LinkRef],
}

/// Build the setup cell for an item.
pub fn setup_cell(spec: &SetupCellSpec<'_>) -> Cell {
    let mut lines: Vec<String> = vec![
        "# First we need to download some things!\n".to_string(),
        "# Run this cell to get the necessary data and software\n".to_string(),
        "import os\n".to_string(),
        "import urllib.request\n".to_string(),
        "import zipfile\n".to_string(),
        "\n".to_string(),
    ];

    if !spec.install.is_empty() {
        lines.push("# Install required packages\n".to_string());
        for package in spec.install {
            let package = package.trim();
            if !package.is_empty() {
                lines.push(format!("!pip install --upgrade --quiet {package}\n"));
            }
        }
        lines.push("\n".to_string());
    }

    let SetupCellSpec {
        zip_name,
        github_repo,
        github_branch,
        site_dir,
        ..
    } = spec;

    lines.extend([
        "# Download and extract data files\n".to_string(),
        format!("url = 'https://github.com/{github_repo}/raw/{github_branch}/{site_dir}/{zip_name}'\n"),
        "print(f'Downloading data from {url}...')\n".to_string(),
        format!("urllib.request.urlretrieve(url, '{zip_name}')\n"),
        "\n".to_string(),
        format!("print('Extracting {zip_name}...')\n"),
        format!("with zipfile.ZipFile('{zip_name}', 'r') as zip_ref:\n"),
        "    zip_ref.extractall('.')\n".to_string(),
        "\n".to_string(),
        format!("os.remove('{zip_name}')\n"),
        "print('Data files extracted!')".to_string(),
    ]);

    if !spec.links.is_empty() {
        lines.push("\n".to_string());
        lines.push("# Useful links:\n".to_string());
        for link in spec.links {
            if link.description.is_empty() {
                lines.push(format!("# - {}: {}\n", link.name, link.url));
            } else {
                lines.push(format!("# - {}: {} ({})\n", link.name, link.url, link.description));
            }
        }
    }

    Cell::code(lines)
}

/// Build the markdown cell linking an item's slide deck, placed at the top
/// of both published variants.
pub fn slide_link_cell(slide_file: &str) -> Cell {
    Cell::markdown(vec![format!("**Slides:** [{slide_file}](./{slide_file})")])
}

// ============================================================================
// Tests
// ============================================================================
