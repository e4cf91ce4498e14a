//! Fixed testimonial content shown in the feedback carousel.

#[cfg(test)]
#[path = "testimonials_test.rs"]
mod testimonials_test;

/// Number of symbols in every star rating.
pub const MAX_RATING: u8 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub text: &'static str,
    /// Whole stars out of [`MAX_RATING`].
    pub rating: u8,
    /// Avatar background color.
    pub color: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial { name: "Aisha", text: "Built my first product feature — clear small tasks kept me focused.", rating: 5, color: "#4F46E5" },
    Testimonial { name: "Ravi", text: "Projects were practical and helped my portfolio.", rating: 5, color: "#14B8A6" },
    Testimonial { name: "Priya", text: "Affordable phases; I completed Basic and Beginner quickly.", rating: 4, color: "#F59E0B" },
    Testimonial { name: "Sameer", text: "The certificate process was smooth and professional.", rating: 5, color: "#2563EB" },
    Testimonial { name: "Maya", text: "Loved the hands-on projects and small deliverables.", rating: 5, color: "#7C3AED" },
    Testimonial { name: "Arjun", text: "Great pacing; I shipped deployable code.", rating: 5, color: "#06B6D4" },
    Testimonial { name: "Nisha", text: "Community helpful for peer reviews despite no mentor.", rating: 4, color: "#F97316" },
    Testimonial { name: "Vikram", text: "Realistic tasks, good for interviews.", rating: 5, color: "#0EA5A4" },
    Testimonial { name: "Sana", text: "Affordable and certificate is valued by employers.", rating: 5, color: "#DB2777" },
    Testimonial { name: "Diego", text: "Enjoyed the data topics and clarity of instructions.", rating: 5, color: "#065F46" },
];

impl Testimonial {
    /// Avatar text: the first two characters of the name, uppercased.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name.chars().take(2).collect::<String>().to_uppercase()
    }

    /// `★` for each earned star, `☆` for the rest. Always five symbols;
    /// ratings above five are clamped.
    #[must_use]
    pub fn stars(&self) -> String {
        star_rating(self.rating)
    }
}

/// Render `rating` as a fixed-width five-symbol star string.
#[must_use]
pub fn star_rating(rating: u8) -> String {
    let filled = usize::from(rating.min(MAX_RATING));
    let hollow = usize::from(MAX_RATING) - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(hollow))
}
