use super::layout;

/// Homepage.
pub fn index(user: Option<&str>) -> String {
    let body = r#"<h1>Výlety za vědou</h1>
<p>Science excursions for secondary school students: labs, observatories,
field trips and research institutes, with the people who work there.</p>
<p><a href="/events/">Browse upcoming excursions</a></p>"#;
    layout("Home", user, body)
}
