use std::io::{self, Write};
use std::path::Path;

use pgm2png::Transform;
use pgm2png::transform::Transformed;

pub fn print_parameters(input: &Path, transform: &Transform) {
    let mut stdout = io::stdout().lock();
    for line in render_parameters(input, transform) {
        let _ = writeln!(stdout, "{line}");
    }
}

pub fn print_transformed(done: &Transformed, transform: &Transform) {
    let mut stdout = io::stdout().lock();
    for line in render_transformed(done, transform) {
        let _ = writeln!(stdout, "{line}");
    }
}

fn render_parameters(input: &Path, transform: &Transform) -> Vec<String> {
    vec![
        format!("Input: {}", input.display()),
        format!("  Rotation angle: {:.2} degrees", transform.rotation()),
        format!("  Scale factor: {:.2}", transform.scale()),
    ]
}

fn render_transformed(done: &Transformed, transform: &Transform) -> Vec<String> {
    let (sw, sh) = done.source_size;
    let (ow, oh) = done.output_size;
    vec![
        format!(
            "Saved transformed image: {} ({sw}x{sh} → {ow}x{oh})",
            done.output.display()
        ),
        format!(
            "Applied transformations: Rotation={}°, Scale={}",
            transform.rotation(),
            transform.scale()
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn parameters_use_two_decimals() {
        let t = Transform::new(30.0, 0.5).unwrap();
        assert_eq!(
            render_parameters(Path::new("lena.pgm"), &t),
            vec![
                "Input: lena.pgm",
                "  Rotation angle: 30.00 degrees",
                "  Scale factor: 0.50",
            ]
        );
    }

    #[test]
    fn result_names_file_and_sizes() {
        let done = Transformed {
            output: PathBuf::from("lena_transformed.pgm"),
            source_size: (4, 2),
            output_size: (2, 4),
        };
        let lines = render_transformed(&done, &Transform::new(90.0, 1.0).unwrap());

        assert_eq!(lines[0], "Saved transformed image: lena_transformed.pgm (4x2 → 2x4)");
        assert_eq!(lines[1], "Applied transformations: Rotation=90°, Scale=1");
    }
}
