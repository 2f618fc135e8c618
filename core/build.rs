fn main() {
    blbuild::emit(&[]);
}
