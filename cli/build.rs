fn main() {
    blbuild::emit(&[("BUILDLENS_PRODUCT", "BuildLens")]);
}
