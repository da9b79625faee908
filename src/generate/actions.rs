use crate::types::{EntryPointSet, FilteredImport};

pub const DEFAULT_DIRECTIVE: &str = "use server";

/// Render the derived server-actions module.
///
/// Import paths get one extra leading `.` because the derived file lives one
/// directory below the declaration file.
pub fn generate_actions(
    directive: &str,
    imports: &[FilteredImport],
    entry_points: &EntryPointSet,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("\"{}\"\n\n", directive));

    for import in imports {
        output.push_str(&format!(
            "import {{ {} }} from \".{}\";\n",
            import.names.join(", "),
            import.path
        ));
    }

    output.push_str(&format!(
        "\nexport {{ {} }}\n",
        entry_points.names().join(", ")
    ));

    output
}
