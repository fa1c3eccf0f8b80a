use anyhow::Result;
use skillsphere_application::Directory;

use super::browse::print_detail;

pub async fn register(
    directory: &Directory,
    username: &str,
    email: &str,
    password: &str,
) -> Result<()> {
    let user = directory.session().register(username, email, password).await?;
    println!("Registration successful! Signed in as {}.", user.username);
    Ok(())
}

pub async fn login(directory: &Directory, email: &str, password: &str) -> Result<()> {
    let user = directory.session().login(email, password).await?;
    println!("Login successful! Signed in as {}.", user.username);
    Ok(())
}

pub fn logout(directory: &Directory) -> Result<()> {
    directory.session().logout()?;
    println!("Logged out successfully");
    Ok(())
}

pub async fn whoami(directory: &Directory) -> Result<()> {
    let Some(user) = directory.session().current_user() else {
        println!("Not signed in.");
        return Ok(());
    };
    println!("{} <{}> (user {})", user.username, user.email, user.id);

    match directory.profiles().my_profile().await? {
        Some(profile) => {
            println!();
            print_detail(&profile);
        }
        None => println!("No profile yet."),
    }
    Ok(())
}
