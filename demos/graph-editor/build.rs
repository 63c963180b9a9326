fn main() {
    slint_build::compile("ui/editor.slint").unwrap();
}
