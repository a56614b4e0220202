//! Flat custom-property stylesheets as produced by the CSS generator.

/// Light/dark semantic colors plus one token for every static group, an
/// ignored namespace, and one declaration no rule claims.
pub const SAMPLE_STYLESHEET: &str = "\
/* generated */
:root {
    --semantic-color-light-background-primary: rgb(255 255 255);
    --semantic-color-light-text-primary: rgb(0 0 0);
    --semantic-color-light-icon-muted: rgb(100 100 100);
    --semantic-color-light-border-subtle: rgb(200 200 200);
    --semantic-color-light-accent: rgb(0 0 255);
    --semantic-color-dark-background-primary: rgb(0 0 0);
    --semantic-color-dark-text-primary: rgb(255 255 255);
    --semantic-color-dark-icon-muted: rgb(150 150 150);
    --semantic-color-dark-border-subtle: rgb(60 60 60);
    --semantic-color-dark-accent: rgb(100 100 255);
    --primitive-color-blue-500: rgb(0 0 255);
    --layout-breakpoint-md: 768;
    --primitive-type-size-base: 16;
    --semantic-type-body-md-size: 14;
    --primitive-type-weight-bold: 700;
    --semantic-type-heading-lg-weight: 600;
    --primitive-type-line-height-normal: 24;
    --primitive-type-family-sans: 'Inter';
    --border-radius-md: 8;
    --border-width-thin: 1;
    --spacing-desktop-space-4: 16;
    --spacing-mobile-4: 12;
    --unit-base: 4;
    --elevation-card: 2;
}
";

/// Light/dark pair where the dark variant lacks `accent`.
pub const MISMATCHED_THEMES: &str = "\
:root {
    --semantic-color-light-background-primary: rgb(255 255 255);
    --semantic-color-light-accent: rgb(0 0 255);
    --semantic-color-dark-background-primary: rgb(0 0 0);
}
";
