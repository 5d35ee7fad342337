use super::BoilerplateScript;

pub(crate) fn scripts() -> Vec<BoilerplateScript> {
    vec![
        BoilerplateScript::new(
            "create-sudo-user",
            "Create User with Sudo Rights",
            "Creates a new user and grants sudo privileges",
            "user-management",
            r##"#!/bin/bash

# Create User with Sudo Rights Script
# Description: Creates a new user and adds them to sudo group
# Usage: ./create_sudo_user.sh [username]

USERNAME=${1:-"newuser"}

# Create user
useradd -m -s /bin/bash $USERNAME

# Set password
passwd $USERNAME

# Add to sudo group
usermod -aG sudo $USERNAME

echo "User $USERNAME created and added to sudo group"
exit 0
"##,
        ),
        BoilerplateScript::new(
            "delete-user",
            "Delete User Script",
            "Removes a user from the system and deletes the home directory",
            "user-management",
            r##"#!/bin/bash

# Delete User Script
# Description: Removes a user and their home directory
# Usage: ./delete_user.sh [username]

# Check if the script is running as root
if [ "$EUID" -ne 0 ]; then
  echo "Please run this script as root or with sudo"
  exit 1
fi

# Get username
USERNAME=${1:-"username"}

# Check if the user exists
if id "$USERNAME" >/dev/null 2>&1; then
  echo "Deleting user: $USERNAME"

  # Delete the user and their home directory
  deluser --remove-home $USERNAME

  echo "User $USERNAME has been deleted along with their home directory."
else
  echo "User $USERNAME does not exist."
  exit 1
fi

exit 0
"##,
        ),
        BoilerplateScript::new(
            "add-ssh-key",
            "Add SSH Key to User's Authorized Keys",
            "Automatically adds an SSH key to a user's authorized keys",
            "user-management",
            r##"#!/bin/bash

# Add SSH Key to Authorized Keys Script
# Description: Adds an SSH public key to a user's authorized_keys file
# Usage: ./add_ssh_key.sh [username] [ssh_public_key]

# Get username
USERNAME=${1:-"$(whoami)"}
SSH_KEY=${2:-"ssh-rsa YOUR_SSH_KEY user@example.com"}

# Check if the user exists
if ! id "$USERNAME" >/dev/null 2>&1; then
  echo "Error: User $USERNAME does not exist."
  exit 1
fi

# Get the user's home directory
USER_HOME=$(eval echo ~$USERNAME)

# Create .ssh directory if it doesn't exist
SSH_DIR="$USER_HOME/.ssh"
if [ ! -d "$SSH_DIR" ]; then
  mkdir -p "$SSH_DIR"
  chown $USERNAME:$USERNAME "$SSH_DIR"
  chmod 700 "$SSH_DIR"
fi

# Create or append to authorized_keys file
AUTH_KEYS="$SSH_DIR/authorized_keys"
echo "$SSH_KEY" >> "$AUTH_KEYS"

# Set proper permissions
chown $USERNAME:$USERNAME "$AUTH_KEYS"
chmod 600 "$AUTH_KEYS"

echo "SSH key added to $USERNAME's authorized_keys file."
exit 0
"##,
        ),
        BoilerplateScript::new(
            "list-users",
            "List All Users",
            "Outputs a list of all users on the system",
            "user-management",
            r##"#!/bin/bash

# List All Users Script
# Description: Displays all users on the system
# Usage: ./list_users.sh

echo "Listing all users with UID >= 1000 (standard users):"
echo "---------------------------------------------------"
awk -F: '$3 >= 1000 && $3 != 65534 {print $1}' /etc/passwd

echo -e "\nListing system users (UID < 1000):"
echo "-----------------------------------"
awk -F: '$3 < 1000 {print $1}' /etc/passwd

echo -e "\nListing users with shell access:"
echo "--------------------------------"
grep -v '/nologin\|/false' /etc/passwd | cut -d: -f1

echo -e "\nUsers currently logged in:"
echo "---------------------------"
who | cut -d' ' -f1 | sort | uniq
"##,
        ),
    ]
}
