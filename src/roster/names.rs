pub const SURNAMES: [&str; 25] = [
    "Ivanov", "Smirnov", "Kuznetsov", "Popov", "Vasiliev", "Petrov", "Sokolov", "Mikhailov",
    "Novikov", "Fedorov", "Morozov", "Volkov", "Alekseev", "Lebedev", "Semenov", "Egorov",
    "Pavlov", "Kozlov", "Stepanov", "Nikolaev", "Orlov", "Andreev", "Makarov", "Nikitin",
    "Zakharov",
];

pub const GIVEN_NAMES: [&str; 20] = [
    "Alexander", "Danila", "Alexey", "Kirill", "Sergey", "Nikita", "Andrey", "Artem", "Dmitry",
    "Ivan", "Mikhail", "Petr", "Pavel", "Egor", "Ilya", "Matvey", "Konstantin", "Maxim",
    "Viktor", "Grigory",
];
