use chrono::Utc;
use ratadie::{Armenian, Calendar, Egyptian, Gregorian, JulianDay, ModifiedJulianDay, Moment, Position};

fn main() {
    let now = Moment::from_utc(Utc::now());
    let today: Gregorian = now.to();

    println!("{now} ({})", now.to_clock());
    println!("{today}, a {}", today.day_of_week());
    println!("{}", today.rata_die());
    println!("{}", today.to::<Egyptian>());
    println!("{}", today.to::<Armenian>());
    println!("{}", JulianDay::from_moment(now));
    println!("{}", today.to::<ModifiedJulianDay>());

    let urbana = Position::new(40.1, -88.2, 225.0, -0.25);
    let mecca = Position::new(21.4233, 39.8233, 298.0, 0.125);
    println!("Urbana -> Mecca: {:.2}°", urbana.direction(&mecca));
}
